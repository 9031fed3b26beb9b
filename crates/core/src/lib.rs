//! Game engine - pure, deterministic and testable
//!
//! This crate holds every rule of the game and nothing else: no clock, no
//! terminal, no I/O. The same code drives interactive play, the automated
//! player and the tests.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, row completion and copy-on-write line clearing
//! - [`piece`]: shape matrices, naive clockwise rotation, spawn placement
//! - [`rules`]: the single validity predicate plus movement, ghost and game over
//! - [`scoring`]: line clear table, drop bonuses, level and drop-time curves
//! - [`rng`]: injectable random source for piece selection
//! - [`session`]: the state machine; every action returns a new session
//! - [`scheduler`]: frame-rate independent automatic descent
//! - [`snapshot`]: plain-data view of a session for renderers and logs
//!
//! # Game Rules
//!
//! - **Randomizer**: each piece kind drawn independently and uniformly
//! - **Rotation**: 90° clockwise in place, discarded when blocked (no wall kicks)
//! - **Gravity**: a blocked piece locks on the next automatic tick
//! - **Scoring**: 40/100/300/1200 x (level + 1), +1 per soft-drop cell,
//!   +2 per hard-drop row
//! - **Levels**: one per 10 lines; drop time `max(50, 800 - 50 x level)` ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameSession, SimpleRng};
//! use blockfall_core::types::GameAction;
//!
//! let session = GameSession::new(SimpleRng::new(12345))
//!     .apply(GameAction::MoveRight)
//!     .apply(GameAction::Rotate)
//!     .apply(GameAction::HardDrop);
//!
//! // Hard drop awards points for the distance travelled
//! assert!(session.score() > 0);
//! assert!(!session.is_game_over());
//! ```

pub mod board;
pub mod piece;
pub mod rng;
pub mod rules;
pub mod scheduler;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, RowList};
pub use piece::{Piece, Position, Shape};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use rules::{can_move, ghost, is_game_over, is_valid};
pub use scheduler::{DropScheduler, SchedulerState};
pub use scoring::{drop_score, drop_time_for_level, level_for_lines, score_for_clear, DropKind};
pub use session::{GameSession, LockEvent};
pub use snapshot::{GameSnapshot, PieceSnapshot};
