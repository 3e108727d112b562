//! Serialized action queue.
//!
//! Input events and timer ticks arrive independently, but the session must see
//! them one at a time. The driver pushes every action here and drains the
//! queue in arrival order between frames. Capacity is fixed (stack-only); when
//! a burst overflows it, the newest actions are dropped.

use arrayvec::ArrayVec;

use crate::types::GameAction;

/// Maximum actions buffered between two drains
pub const QUEUE_CAPACITY: usize = 32;

#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
    pending: ArrayVec<GameAction, QUEUE_CAPACITY>,
    dropped: u32,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an action; returns false (and counts a drop) when full.
    pub fn push(&mut self, action: GameAction) -> bool {
        match self.pending.try_push(action) {
            Ok(()) => true,
            Err(_) => {
                self.dropped = self.dropped.wrapping_add(1);
                false
            }
        }
    }

    /// Feed every pending action, oldest first, to `apply`.
    ///
    /// Returns how many actions were applied.
    pub fn drain_into(&mut self, mut apply: impl FnMut(GameAction)) -> usize {
        let count = self.pending.len();
        for action in self.pending.drain(..) {
            apply(action);
        }
        count
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Actions discarded because the queue was full
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
