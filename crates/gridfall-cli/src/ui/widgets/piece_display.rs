use gridfall_engine::PieceKind;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::{Tile, TileDisplay};

/// Preview of a single piece in its spawn orientation.
#[derive(Debug)]
pub struct PieceDisplay<'a> {
    piece: Option<PieceKind>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub fn new() -> Self {
        Self {
            piece: None,
            block: None,
        }
    }

    pub fn piece(self, piece: PieceKind) -> Self {
        Self {
            piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        4 * TileDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        4 * TileDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let empty_tile = TileDisplay::from_tile(Tile::Empty, false);
        Widget::render(&empty_tile, area, buf);

        let Some(piece) = self.piece else {
            return;
        };

        let shape = piece.shape();
        let size = u16::try_from(shape.size()).unwrap();
        let piece_area = area.centered(
            Constraint::Length(size * TileDisplay::width()),
            Constraint::Length(size * TileDisplay::height()),
        );

        let col_constraints = (0..size).map(|_| Constraint::Length(TileDisplay::width()));
        let row_constraints = (0..size).map(|_| Constraint::Length(TileDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);
        let grid_rows = piece_area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        let occupied_tile = TileDisplay::from_tile(Tile::Piece(piece), false);
        for (y, grid_row) in grid_rows.enumerate() {
            for (x, grid_cell) in grid_row.into_iter().enumerate() {
                if !shape.cell(x, y).is_empty() {
                    Widget::render(&occupied_tile, grid_cell, buf);
                }
            }
        }
    }
}
