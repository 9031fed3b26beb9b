//! Terminal rendering for the game.
//!
//! Rendering is split in two: [`GameView`] turns a snapshot into a
//! framebuffer of styled cells (pure, testable), and [`TerminalRenderer`]
//! diffs framebuffers and writes crossterm commands.
//!
//! Board cells are drawn 2 columns wide so blocks look square.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
