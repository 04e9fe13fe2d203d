use std::iter;

use gridfall_engine::{ActivePiece, Board, COLS, ROWS, Shape};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::{Tile, TileDisplay};

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    active: Option<&'a ActivePiece>,
    ghost_y: Option<i32>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            active: None,
            ghost_y: None,
            block: None,
        }
    }

    pub fn active_piece(self, piece: &'a ActivePiece) -> Self {
        Self {
            active: Some(piece),
            ..self
        }
    }

    pub fn ghost_y(self, y: i32) -> Self {
        Self {
            ghost_y: Some(y),
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
        u16::try_from(COLS).unwrap() * TileDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS).unwrap() * TileDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// Projects the board and the piece overlays into a tile grid.
    ///
    /// The ghost is stamped first so the falling piece wins where the two
    /// overlap. Rows above the visible board are clipped.
    fn tiles(&self) -> [[Tile; COLS]; ROWS] {
        let mut tiles = [[Tile::Empty; COLS]; ROWS];
        for (y, row) in self.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                tiles[y][x] = Tile::from(*cell);
            }
        }
        if let Some(piece) = self.active {
            if let Some(ghost_y) = self.ghost_y {
                stamp(&mut tiles, piece.shape(), piece.x(), ghost_y, Tile::Ghost);
            }
            stamp(
                &mut tiles,
                piece.shape(),
                piece.x(),
                piece.y(),
                Tile::Piece(piece.kind()),
            );
        }
        tiles
    }
}

fn stamp(tiles: &mut [[Tile; COLS]; ROWS], shape: &Shape, x: i32, y: i32, tile: Tile) {
    for (dx, dy, _) in shape.occupied_cells() {
        let (Ok(col), Ok(row)) = (usize::try_from(x + dx), usize::try_from(y + dy)) else {
            continue;
        };
        if col < COLS && row < ROWS {
            tiles[row][col] = tile;
        }
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let tiles = self.tiles();

        let col_constraints = (0..COLS).map(|_| Constraint::Length(TileDisplay::width()));
        let row_constraints = (0..ROWS).map(|_| Constraint::Length(TileDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<{ ROWS }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ COLS }>(&horizontal));

        for (grid_row, row) in iter::zip(grid_cells, tiles) {
            for (grid_cell, tile) in iter::zip(grid_row, row) {
                let tile_display = TileDisplay::from_tile(tile, true);
                tile_display.render(grid_cell, buf);
            }
        }
    }
}
