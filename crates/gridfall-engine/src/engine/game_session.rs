use std::time::Duration;

use rand::Rng as _;

use crate::{
    PieceCollisionError,
    core::{
        board::Board,
        piece::{PieceKind, Rotation},
    },
};

use super::{ActivePiece, GameStats, PieceBag, PieceSeed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Running,
    Paused,
    GameOver,
}

/// Gravity interval for a level: 1000ms at level 1, 80ms faster per level,
/// floored at 100ms.
fn drop_interval(level: u32) -> Duration {
    let millis = u64::max(100, 1000_u64.saturating_sub(u64::from(level - 1) * 80));
    Duration::from_millis(millis)
}

/// One game from first spawn to game over.
///
/// Owns the board, the active piece, the queued next piece and the stats,
/// and drives the spawn/lock/clear lifecycle. Movement and rotation commands
/// are validated against the board and rejected with state untouched when
/// they do not fit; gravity is advanced by [`update`] with the elapsed time
/// since the previous frame.
///
/// Commands other than [`toggle_pause`], [`reset`] and [`quit`] are no-ops
/// unless the session is [`SessionState::Running`].
///
/// [`update`]: GameSession::update
/// [`toggle_pause`]: GameSession::toggle_pause
/// [`reset`]: GameSession::reset
/// [`quit`]: GameSession::quit
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    bag: PieceBag,
    stats: GameStats,
    state: SessionState,
    drop_timer: Duration,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session with a random piece sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a seeded piece sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::start(PieceBag::with_seed(seed))
    }

    fn start(mut bag: PieceBag) -> Self {
        let active = ActivePiece::spawn(bag.pop_next());
        let next = bag.pop_next();
        Self {
            board: Board::EMPTY,
            active,
            next,
            bag,
            stats: GameStats::new(),
            state: SessionState::Running,
            drop_timer: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn active_piece(&self) -> &ActivePiece {
        &self.active
    }

    #[must_use]
    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    /// Resting y of the active piece if dropped straight down.
    #[must_use]
    pub fn ghost_y(&self) -> i32 {
        self.active.ghost_y(&self.board)
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.state
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceCollisionError> {
        self.try_shift(-1)
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceCollisionError> {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i32) -> Result<(), PieceCollisionError> {
        if !self.state.is_running() {
            return Err(PieceCollisionError);
        }
        self.active.try_shift(dx, &self.board)
    }

    pub fn try_rotate_cw(&mut self) -> Result<(), PieceCollisionError> {
        self.try_rotate(Rotation::Clockwise)
    }

    pub fn try_rotate_ccw(&mut self) -> Result<(), PieceCollisionError> {
        self.try_rotate(Rotation::CounterClockwise)
    }

    fn try_rotate(&mut self, rotation: Rotation) -> Result<(), PieceCollisionError> {
        if !self.state.is_running() {
            return Err(PieceCollisionError);
        }
        self.active.try_rotate(rotation, &self.board)
    }

    /// Moves the piece down one row for a point, or locks it if it cannot
    /// fall any further.
    pub fn soft_drop(&mut self) {
        if !self.state.is_running() {
            return;
        }
        if self.active.try_shift_down(&self.board).is_ok() {
            self.stats.award_soft_drop();
        } else {
            self.lock_and_spawn();
        }
    }

    /// Drops the piece to its ghost position and locks it immediately.
    pub fn hard_drop(&mut self) {
        if !self.state.is_running() {
            return;
        }
        self.active.drop_to_bottom(&self.board);
        self.lock_and_spawn();
    }

    /// Advances the gravity timer by the elapsed time since the last frame.
    ///
    /// When the accumulated time reaches the level's drop interval the timer
    /// resets and the piece falls one row, locking if it cannot.
    pub fn update(&mut self, delta: Duration) {
        if !self.state.is_running() {
            return;
        }
        self.drop_timer += delta;
        if self.drop_timer >= drop_interval(self.stats.level()) {
            self.drop_timer = Duration::ZERO;
            if self.active.try_shift_down(&self.board).is_err() {
                self.lock_and_spawn();
            }
        }
    }

    /// Toggles between `Running` and `Paused`. No effect after game over.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SessionState::Running => SessionState::Paused,
            SessionState::Paused => SessionState::Running,
            SessionState::GameOver => SessionState::GameOver,
        };
    }

    /// Ends the session. Accepted in any state.
    pub fn quit(&mut self) {
        self.state = SessionState::GameOver;
    }

    /// Restarts from scratch: empty board, zeroed stats, fresh bag draws.
    /// Accepted in any state. The bag's generator keeps its state, so a
    /// seeded session stays deterministic across resets.
    pub fn reset(&mut self) {
        self.bag.discard_remaining();
        *self = Self::start(self.bag.clone());
    }

    /// Commits the active piece to the board, scores any cleared lines and
    /// spawns the queued next piece. A spawn whose one-row-down position
    /// already collides ends the game.
    fn lock_and_spawn(&mut self) {
        self.board
            .lock(self.active.shape(), self.active.x(), self.active.y());
        let cleared = self.board.clear_full_lines();
        self.stats.apply_line_clears(cleared);

        self.active = ActivePiece::spawn(self.next);
        self.next = self.bag.pop_next();
        if !self
            .board
            .is_valid_position(self.active.shape(), self.active.x(), self.active.y() + 1)
        {
            self.state = SessionState::GameOver;
        }
    }
}
