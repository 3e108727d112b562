//! Game engine - orchestrates spawn → fall → collide → lock → clear → respawn
//!
//! [`GameSession`] is the single owner of mutable game state. It consults the
//! core [`Board`](crate::core::Board) for every move and mutates it only when
//! a piece locks. Renderers read [`GameSnapshot`]s, which are derived views
//! and never stored back.
//!
//! # Example
//!
//! ```
//! use rialo_tetris_engine::{GameSession, StepOutcome};
//!
//! let mut game = GameSession::new_game(12345);
//! game.move_left();
//! game.rotate();
//!
//! // Gravity: the driver calls `step` on a fixed cadence.
//! assert_eq!(game.step(), StepOutcome::Fell);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.score, 0);
//! assert!(!snap.game_over);
//! ```
//!
//! # Concurrency
//!
//! Sessions are plain owned values without interior locking. Calls must be
//! serialized by the caller; independent sessions share nothing.

pub mod session;
pub mod snapshot;

pub use rialo_tetris_core as core;
pub use rialo_tetris_types as types;

pub use session::{GameSession, GameStatus, StepOutcome};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
