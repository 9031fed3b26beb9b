//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Held keys are
//! left to the terminal's own auto-repeat, so press and repeat events map the
//! same way.

pub mod map;

pub use blockfall_types as types;

pub use map::{action_for_key, should_quit};
