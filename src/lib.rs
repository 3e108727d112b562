//! Rialo Tetris (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `rialo_tetris::{types,core,engine,input,term}` and adds
//! the runtime [`config`] used by the terminal binary.

pub mod config;

pub use rialo_tetris_core as core;
pub use rialo_tetris_engine as engine;
pub use rialo_tetris_input as input;
pub use rialo_tetris_term as term;
pub use rialo_tetris_types as types;
