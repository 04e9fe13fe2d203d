//! Game logic built on the core data structures.
//!
//! - [`PieceBag`] - 7-bag piece generation, seedable via [`PieceSeed`]
//! - [`ActivePiece`] - the falling piece: movement, rotation with wall
//!   kicks, ghost position
//! - [`GameSession`] - the spawn/lock/clear state machine with scoring and
//!   level progression
//! - [`GameStats`] - score, lines and level for one session
//!
//! # Game flow
//!
//! 1. [`GameSession::new`] spawns the first piece from a shuffled bag
//! 2. The input adapter moves and rotates the piece; the host calls
//!    [`GameSession::update`] once per frame with the elapsed time
//! 3. A piece that can no longer fall is locked, full lines are cleared and
//!    scored, and the queued next piece spawns
//! 4. The game ends when a spawned piece immediately collides
//!
//! # Example
//!
//! ```
//! use gridfall_engine::GameSession;
//! use std::time::Duration;
//!
//! let mut session = GameSession::new();
//!
//! let _ = session.try_move_left();
//! let _ = session.try_rotate_cw();
//! session.update(Duration::from_millis(16));
//!
//! session.hard_drop();
//! println!("score: {}", session.stats().score());
//! ```

pub use self::{active_piece::*, game_session::*, game_stats::*, piece_bag::*};

mod active_piece;
mod game_session;
mod game_stats;
mod piece_bag;
