//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the building blocks the engine plays with. It has
//! **zero dependencies** on UI, terminal or timing code:
//!
//! - **Deterministic**: shape selection comes from a seeded RNG
//! - **Total**: board and piece operations never fail on well-formed input
//! - **Fail-fast construction**: bad dimensions or catalogs are rejected
//!   through [`ConfigError`] before any game exists
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven built-in shapes and uniform random selection
//! - [`piece`]: shape matrices, clockwise rotation, the falling piece
//! - [`board`]: the cell grid, collision test, merge and row clearing
//! - [`config`]: session construction parameters and their validation
//! - [`rng`]: small seeded LCG
//!
//! # Example
//!
//! ```
//! use rialo_tetris_core::{rotate_cw, Board, ShapeDef};
//! use rialo_tetris_core::types::{Color, ShapeKind};
//!
//! let mut board = Board::new();
//! let o = ShapeDef::standard(ShapeKind::O);
//!
//! assert!(board.is_valid_position(&o.matrix, 18, 3));
//! assert!(!board.is_valid_position(&o.matrix, 19, 3));
//!
//! board.merge(&o.matrix, Color::Yellow, 18, 3);
//! assert_eq!(board.clear_full_rows(), 0);
//!
//! let i = ShapeDef::standard(ShapeKind::I).matrix;
//! assert_eq!(rotate_cw(&i).rows(), 4);
//! ```

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod piece;
pub mod rng;

pub use rialo_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{Catalog, ShapeDef, STANDARD_SHAPES};
pub use config::GameConfig;
pub use error::ConfigError;
pub use piece::{rotate_cw, Piece, ShapeMatrix};
pub use rng::SimpleRng;
