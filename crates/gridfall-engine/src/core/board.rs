use super::piece::{Cell, PieceKind, Shape};

/// Number of columns in the playable grid.
pub const COLS: usize = 10;
/// Number of rows in the playable grid.
pub const ROWS: usize = 20;

#[expect(clippy::cast_possible_wrap)]
pub(crate) const COLS_I32: i32 = COLS as i32;
#[expect(clippy::cast_possible_wrap)]
pub(crate) const ROWS_I32: i32 = ROWS as i32;

/// The committed cell matrix, `ROWS` x `COLS`.
///
/// The board only ever holds locked cells; the falling piece is overlaid by
/// the session and the render adapter. Mutation happens through [`lock`] and
/// [`clear_full_lines`] alone, so every cell is always either empty or a
/// piece-kind color.
///
/// # Coordinate system
///
/// `(0, 0)` is the top-left playable cell, x grows rightward, y grows
/// downward. Validity queries accept `i32` coordinates because a falling
/// piece's matrix may extend above the visible board (negative y) or be
/// offset past an edge during a wall-kick trial.
///
/// [`lock`]: Board::lock
/// [`clear_full_lines`]: Board::clear_full_lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [[Cell; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        rows: [[Cell::Empty; COLS]; ROWS],
    };

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.rows.iter()
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// Checks whether the shape can occupy the position `(x, y)`.
    ///
    /// Every occupied shape cell must land in a column inside `[0, COLS)` and
    /// a row below `ROWS` is rejected. Rows above the board (negative) are
    /// fine; a piece may protrude past the top while falling in. Cells that
    /// land on an already occupied board cell are rejected. Pure: no side
    /// effects, identical inputs give identical answers.
    #[must_use]
    pub fn is_valid_position(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape.occupied_cells().all(|(dx, dy, _)| {
            let col = x + dx;
            let row = y + dy;
            if col < 0 || col >= COLS_I32 || row >= ROWS_I32 {
                return false;
            }
            let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
                // Negative row: above the visible board, nothing to collide with.
                return true;
            };
            self.rows[row][col].is_empty()
        })
    }

    /// Writes the shape's occupied cells into the board at `(x, y)`.
    ///
    /// Cells that fall outside the grid are silently discarded; this is how a
    /// piece locked while still partially above the top loses those cells.
    pub fn lock(&mut self, shape: &Shape, x: i32, y: i32) {
        for (dx, dy, cell) in shape.occupied_cells() {
            let (Ok(col), Ok(row)) = (usize::try_from(x + dx), usize::try_from(y + dy)) else {
                continue;
            };
            if col < COLS && row < ROWS {
                self.rows[row][col] = cell;
            }
        }
    }

    /// Clears every fully occupied row and returns how many were removed.
    ///
    /// A single bottom-to-top pass: surviving rows shift down by the number
    /// of cleared rows found below them, and that many empty rows are filled
    /// in at the top. Handles any mix of adjacent and separated full rows.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut count = 0;
        for y in (0..ROWS).rev() {
            if self.rows[y].iter().all(|cell| !cell.is_empty()) {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[y + count] = self.rows[y];
            }
        }
        self.rows[..count].fill([Cell::Empty; COLS]);
        count
    }

    /// Creates a `Board` from ASCII art for testing.
    ///
    /// '#' is an occupied cell, '.' an empty one. Rows are listed top to
    /// bottom starting at row 0 and must each contain exactly `COLS` cells;
    /// omitted trailing rows stay empty.
    ///
    /// # Panics
    ///
    /// Panics if a row does not contain exactly `COLS` cell characters.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut board = Self::EMPTY;
        let lines = art.lines().filter(|line| !line.trim().is_empty());

        for (y, line) in lines.enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| *c == '#' || *c == '.').collect();
            assert_eq!(
                cells.len(),
                COLS,
                "Each row must have exactly {COLS} cells, got {} at row {y}",
                cells.len(),
            );
            for (x, &ch) in cells.iter().enumerate() {
                if ch == '#' {
                    board.rows[y][x] = Cell::Piece(PieceKind::I);
                }
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::Rotation;

    fn fill_row(board: &mut Board, y: usize) {
        for x in 0..COLS {
            board.rows[y][x] = Cell::Piece(PieceKind::Z);
        }
    }

    #[test]
    fn test_empty_board_cells() {
        let board = Board::EMPTY;
        for row in board.rows() {
            for cell in row {
                assert!(cell.is_empty());
            }
        }
    }

    #[test]
    fn test_valid_position_inside_empty_board() {
        let board = Board::EMPTY;
        let shape = PieceKind::O.shape();
        assert!(board.is_valid_position(&shape, 0, 0));
        assert!(board.is_valid_position(&shape, 4, 10));
        // O is 2x2: rightmost valid column is COLS - 2.
        assert!(board.is_valid_position(&shape, COLS_I32 - 2, 0));
        assert!(!board.is_valid_position(&shape, COLS_I32 - 1, 0));
    }

    #[test]
    fn test_negative_rows_are_allowed() {
        let board = Board::EMPTY;
        let shape = PieceKind::I.shape();
        // I's occupied row is matrix row 1, so y = -2 keeps it above the top.
        assert!(board.is_valid_position(&shape, 3, -2));
        // Side walls still apply above the board.
        assert!(!board.is_valid_position(&shape, -1, -2));
    }

    #[test]
    fn test_floor_collision() {
        let board = Board::EMPTY;
        let shape = PieceKind::O.shape();
        assert!(board.is_valid_position(&shape, 0, ROWS_I32 - 2));
        assert!(!board.is_valid_position(&shape, 0, ROWS_I32 - 1));
    }

    #[test]
    fn test_occupied_cell_collision() {
        let board = Board::from_ascii(
            r"
            ..........
            ..........
            ..........
            ....#.....
            ",
        );
        let shape = PieceKind::O.shape();
        assert!(!board.is_valid_position(&shape, 4, 2));
        assert!(board.is_valid_position(&shape, 5, 2));
    }

    #[test]
    fn test_is_valid_position_is_pure() {
        let board = Board::from_ascii(
            r"
            ..........
            ..##......
            ",
        );
        let shape = PieceKind::T.shape().rotated(Rotation::Clockwise);
        let first = board.is_valid_position(&shape, 2, 0);
        for _ in 0..10 {
            assert_eq!(board.is_valid_position(&shape, 2, 0), first);
        }
    }

    #[test]
    fn test_lock_writes_color_cells() {
        let mut board = Board::EMPTY;
        let shape = PieceKind::O.shape();
        board.lock(&shape, 4, 18);
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(board.cell(x, y), Cell::Piece(PieceKind::O));
        }
        assert!(board.cell(3, 18).is_empty());
    }

    #[test]
    fn test_lock_discards_cells_above_top() {
        let mut board = Board::EMPTY;
        // I in spawn orientation occupies matrix row 1: at y = -2 that row
        // maps to board row -1 and is discarded, at y = -1 it lands in row 0.
        let shape = PieceKind::I.shape();
        board.lock(&shape, 3, -2);
        for row in board.rows() {
            for cell in row {
                assert!(cell.is_empty());
            }
        }

        board.lock(&shape, 3, -1);
        for x in 3..7 {
            assert_eq!(board.cell(x, 0), Cell::Piece(PieceKind::I));
        }
    }

    #[test]
    fn test_clear_two_adjacent_rows() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 5);
        fill_row(&mut board, 6);
        // A marker above and below the cleared band.
        board.rows[4][3] = Cell::Piece(PieceKind::T);
        board.rows[7][8] = Cell::Piece(PieceKind::L);

        assert_eq!(board.clear_full_lines(), 2);

        // Two empty rows inserted at the top; markers keep relative order.
        assert!(board.rows().take(2).flatten().all(|cell| cell.is_empty()));
        assert_eq!(board.cell(3, 6), Cell::Piece(PieceKind::T));
        assert_eq!(board.cell(8, 7), Cell::Piece(PieceKind::L));
    }

    #[test]
    fn test_clear_two_separated_rows() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 10);
        fill_row(&mut board, 15);
        board.rows[8][0] = Cell::Piece(PieceKind::S);
        board.rows[12][1] = Cell::Piece(PieceKind::J);
        board.rows[19][2] = Cell::Piece(PieceKind::O);

        assert_eq!(board.clear_full_lines(), 2);

        // The row between the two clears shifts down by one, the row above
        // both shifts down by two, the bottom row stays put.
        assert_eq!(board.cell(0, 10), Cell::Piece(PieceKind::S));
        assert_eq!(board.cell(1, 13), Cell::Piece(PieceKind::J));
        assert_eq!(board.cell(2, 19), Cell::Piece(PieceKind::O));
        assert_eq!(
            board.rows().flatten().filter(|cell| !cell.is_empty()).count(),
            3
        );
    }

    #[test]
    fn test_clear_no_full_rows() {
        let mut board = Board::from_ascii(
            r"
            .........#
            #########.
            ",
        );
        assert_eq!(board.clear_full_lines(), 0);
        assert_eq!(board.cell(9, 0), Cell::Piece(PieceKind::I));
    }

    #[test]
    fn test_clear_all_rows() {
        let mut board = Board::EMPTY;
        for y in 0..ROWS {
            fill_row(&mut board, y);
        }
        assert_eq!(board.clear_full_lines(), ROWS);
        assert!(board.rows().flatten().all(|cell| cell.is_empty()));
    }
}
