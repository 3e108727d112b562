//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! engine snapshots into a simple framebuffer that is then flushed to the
//! terminal with crossterm (no widget toolkit).
//!
//! - [`game_view`] is pure: snapshot in, framebuffer out
//! - [`renderer`] owns the terminal and sends diffs between frames
//!
//! The engine never depends on this crate; it only ever sees snapshots read.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use rialo_tetris_engine as engine;
pub use rialo_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{palette, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
