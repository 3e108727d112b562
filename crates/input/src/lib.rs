//! Input and timing adapters (engine-facing).
//!
//! Everything that turns the outside world into a serialized stream of
//! [`GameAction`](crate::types::GameAction)s lives here:
//!
//! - [`map`]: `crossterm` key events to actions
//! - [`queue`]: bounded FIFO the driver drains into the session, one action at
//!   a time
//! - [`clock`]: fixed-interval gravity scheduler, driven by elapsed time so it
//!   can be tested without sleeping
//!
//! Nothing here knows about the engine; the driver wires them together.

pub mod clock;
pub mod map;
pub mod queue;

pub use rialo_tetris_types as types;

pub use clock::StepClock;
pub use map::{handle_key_event, should_quit};
pub use queue::ActionQueue;
