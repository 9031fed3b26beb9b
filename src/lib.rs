//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `blockfall::{core,input,term,types}` and
//! hosts the pieces of the binary that are worth testing: configuration, the
//! event journal and headless automated play.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod autoplay;
pub mod config;
pub mod journal;
