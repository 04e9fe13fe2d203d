use gridfall_engine::{Cell, PieceKind};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

/// What a single board square shows on screen.
///
/// The engine only knows empty and occupied squares; the ghost marker is a
/// rendering concern layered on top.
#[derive(Debug, Clone, Copy)]
pub enum Tile {
    Empty,
    Ghost,
    Piece(PieceKind),
}

impl From<Cell> for Tile {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Tile::Empty,
            Cell::Piece(kind) => Tile::Piece(kind),
        }
    }
}

#[derive(Debug)]
pub struct TileDisplay {
    style: Style,
    symbol: &'static str,
}

impl TileDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_tile(tile: Tile, show_dots: bool) -> Self {
        match tile {
            Tile::Empty => {
                if show_dots {
                    Self::new(style::EMPTY_DOT, ".")
                } else {
                    Self::new(style::EMPTY, "")
                }
            }
            Tile::Ghost => Self::new(style::GHOST, "[]"),
            Tile::Piece(piece_kind) => {
                let style = match piece_kind {
                    PieceKind::T => style::T_BLOCK,
                    PieceKind::L => style::L_BLOCK,
                    PieceKind::J => style::J_BLOCK,
                    PieceKind::O => style::O_BLOCK,
                    PieceKind::S => style::S_BLOCK,
                    PieceKind::Z => style::Z_BLOCK,
                    PieceKind::I => style::I_BLOCK,
                };
                Self::new(style, "")
            }
        }
    }
}

impl Widget for TileDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &TileDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
