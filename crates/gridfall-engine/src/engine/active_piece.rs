use crate::{
    PieceCollisionError,
    core::{
        board::{Board, COLS_I32},
        piece::{PieceKind, Rotation, Shape},
    },
};

/// Horizontal wall-kick offsets, tried in order after a rotation collides.
///
/// A deliberately simplified kick table: one fixed list for every kind and
/// orientation, x-axis only, unlike the per-piece tables of the standard
/// rotation system.
pub const KICK_OFFSETS: [i32; 5] = [0, 1, -1, 2, -2];

/// The currently falling piece: its kind, the shape matrix of its current
/// rotation, and its top-left offset into board coordinates.
///
/// `y` starts at -2 so a freshly spawned piece has room to rotate before it
/// enters the visible board. Exactly one active piece exists per session; it
/// is replaced wholesale on spawn and turned into board cells on lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    kind: PieceKind,
    shape: Shape,
    x: i32,
    y: i32,
}

impl ActivePiece {
    /// Spawns a piece of the given kind, horizontally centered above the
    /// board: `x = COLS/2 - width/2`, `y = -2`.
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = kind.shape();
        let x = COLS_I32 / 2 - (shape.size() as i32) / 2;
        Self {
            kind,
            shape,
            x,
            y: -2,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Shifts the piece horizontally by `dx` if the board allows it.
    pub fn try_shift(&mut self, dx: i32, board: &Board) -> Result<(), PieceCollisionError> {
        if !board.is_valid_position(&self.shape, self.x + dx, self.y) {
            return Err(PieceCollisionError);
        }
        self.x += dx;
        Ok(())
    }

    /// Moves the piece down one row if the board allows it.
    pub fn try_shift_down(&mut self, board: &Board) -> Result<(), PieceCollisionError> {
        if !board.is_valid_position(&self.shape, self.x, self.y + 1) {
            return Err(PieceCollisionError);
        }
        self.y += 1;
        Ok(())
    }

    /// Rotates the piece 90 degrees, kicking off walls where needed.
    ///
    /// The rotated shape is tried at each [`KICK_OFFSETS`] entry in order;
    /// the first offset the board accepts wins. If none fits, the rotation
    /// is rejected with shape and position unchanged.
    pub fn try_rotate(
        &mut self,
        rotation: Rotation,
        board: &Board,
    ) -> Result<(), PieceCollisionError> {
        let rotated = self.shape.rotated(rotation);
        for offset in KICK_OFFSETS {
            if board.is_valid_position(&rotated, self.x + offset, self.y) {
                self.shape = rotated;
                self.x += offset;
                return Ok(());
            }
        }
        Err(PieceCollisionError)
    }

    /// Lowest y this piece can reach by falling straight down. Pure.
    #[must_use]
    pub fn ghost_y(&self, board: &Board) -> i32 {
        let mut y = self.y;
        while board.is_valid_position(&self.shape, self.x, y + 1) {
            y += 1;
        }
        y
    }

    /// Teleports the piece to its ghost position (hard drop).
    pub fn drop_to_bottom(&mut self, board: &Board) {
        self.y = self.ghost_y(board);
    }
}
