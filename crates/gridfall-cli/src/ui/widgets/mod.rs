use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    board_display::*, piece_display::*, session_display::*, session_stats_display::*,
    tile_display::*,
};

mod board_display;
mod piece_display;
mod session_display;
mod session_stats_display;
mod tile_display;

mod color {
    use ratatui::style::Color;

    pub const PINK: Color = Color::Rgb(0xff, 0x33, 0x77);
    pub const ORANGE: Color = Color::Rgb(0xff, 0xa5, 0x00);
    pub const SKY_BLUE: Color = Color::Rgb(0x00, 0x99, 0xff);
    pub const GOLD: Color = Color::Rgb(0xff, 0xd7, 0x00);
    pub const GREEN: Color = Color::Rgb(0x00, 0xcc, 0x66);
    pub const RED: Color = Color::Rgb(0xcc, 0x00, 0x00);
    pub const PURPLE: Color = Color::Rgb(0x99, 0x33, 0xff);
    pub const YELLOW: Color = Color::Rgb(0xff, 0xff, 0x00);
    pub const GRAY: Color = Color::Rgb(0x7f, 0x7f, 0x7f);
    pub const BLACK: Color = Color::Rgb(0x0a, 0x0a, 0x0a);
    pub const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const GHOST: Style = fg_bg(color::WHITE, color::BLACK);

    pub const T_BLOCK: Style = bg_only(color::PINK);
    pub const L_BLOCK: Style = bg_only(color::ORANGE);
    pub const J_BLOCK: Style = bg_only(color::SKY_BLUE);
    pub const O_BLOCK: Style = bg_only(color::GOLD);
    pub const S_BLOCK: Style = bg_only(color::GREEN);
    pub const Z_BLOCK: Style = bg_only(color::RED);
    pub const I_BLOCK: Style = bg_only(color::PURPLE);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
