use serde::{Deserialize, Serialize};

/// A single cell of the board or of a piece shape.
///
/// Occupied cells carry the piece kind that produced them, which doubles as
/// the color key for rendering. [`Cell::color_index`] recovers the classic
/// 0-7 numeric encoding (0 = empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Numeric color key: 0 for empty, 1-7 for the seven piece kinds.
    #[must_use]
    pub const fn color_index(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Piece(kind) => kind.color_index(),
        }
    }
}

/// Enum representing the type of piece (tetromino).
///
/// Declared in color-key order, so `color_index` runs 1-7 in declaration
/// order. This is also the catalog order used when refilling the piece bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// T-piece.
    T = 0,
    /// L-piece.
    L = 1,
    /// J-piece.
    J = 2,
    /// O-piece.
    O = 3,
    /// S-piece.
    S = 4,
    /// Z-piece.
    Z = 5,
    /// I-piece.
    I = 6,
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// All piece kinds in catalog order.
    pub const ALL: [PieceKind; PieceKind::LEN] = [
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
    ];

    /// Color key of this kind (1-7).
    #[must_use]
    pub const fn color_index(self) -> u8 {
        self as u8 + 1
    }

    /// Returns a fresh copy of this kind's catalog shape in spawn orientation.
    #[must_use]
    pub fn shape(self) -> Shape {
        Shape::catalog(self)
    }

    /// Returns the single character representation of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::I => 'I',
        }
    }

    /// Parses a piece kind from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'I' => Some(PieceKind::I),
            _ => None,
        }
    }
}

/// Direction of a 90-degree rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// A square matrix of cells describing one orientation of a piece.
///
/// Catalog shapes are 2x2 (O), 3x3 (T, L, J, S, Z) or 4x4 (I), matching the
/// classic matrix definitions. Shapes are values: [`Shape::rotated`] returns
/// a new matrix and never touches the catalog entry it was copied from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    cells: Vec<Vec<Cell>>,
}

impl Shape {
    fn catalog(kind: PieceKind) -> Self {
        let k = Cell::Piece(kind);
        let e = Cell::Empty;
        let cells = match kind {
            PieceKind::T => vec![vec![e, k, e], vec![k, k, k], vec![e, e, e]],
            PieceKind::L => vec![vec![e, e, k], vec![k, k, k], vec![e, e, e]],
            PieceKind::J => vec![vec![k, e, e], vec![k, k, k], vec![e, e, e]],
            PieceKind::O => vec![vec![k, k], vec![k, k]],
            PieceKind::S => vec![vec![e, k, k], vec![k, k, e], vec![e, e, e]],
            PieceKind::Z => vec![vec![k, k, e], vec![e, k, k], vec![e, e, e]],
            PieceKind::I => vec![
                vec![e, e, e, e],
                vec![k, k, k, k],
                vec![e, e, e, e],
                vec![e, e, e, e],
            ],
        };
        Self { cells }
    }

    /// Side length of the square matrix (2, 3 or 4).
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    /// Iterates over the occupied cells as `(dx, dy, cell)` offsets into the
    /// matrix. Offsets are signed so callers can add them to board
    /// coordinates that may be negative (a piece above the visible board).
    #[expect(clippy::cast_possible_wrap)]
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(dy, row)| {
            row.iter().enumerate().filter_map(move |(dx, &cell)| {
                (!cell.is_empty()).then_some((dx as i32, dy as i32, cell))
            })
        })
    }

    /// Returns a geometrically rotated copy of this shape.
    ///
    /// Clockwise is transpose-then-reverse-rows; counter-clockwise is the
    /// inverse transform. The matrix stays square, so four rotations in the
    /// same direction return to the original shape.
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let size = self.size();
        let cells = (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| match rotation {
                        Rotation::Clockwise => self.cells[size - 1 - x][y],
                        Rotation::CounterClockwise => self.cells[x][size - 1 - y],
                    })
                    .collect()
            })
            .collect();
        Self { cells }
    }
}
