//! Fixed-interval gravity scheduler.
//!
//! The clock only accumulates elapsed milliseconds and reports how many steps
//! are due; it never sleeps and never reads the wall clock itself. The
//! interval is constant for the lifetime of the clock.

use crate::types::STEP_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepClock {
    interval_ms: u64,
    accumulated_ms: u64,
}

impl StepClock {
    /// A clock firing every `interval_ms` (clamped to at least 1 ms)
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Add elapsed time and return how many steps became due.
    pub fn advance(&mut self, elapsed_ms: u64) -> u32 {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        let due = self.accumulated_ms / self.interval_ms;
        self.accumulated_ms %= self.interval_ms;
        u32::try_from(due).unwrap_or(u32::MAX)
    }

    /// Milliseconds until the next step is due
    pub fn remaining_ms(&self) -> u64 {
        self.interval_ms - self.accumulated_ms
    }

    /// Restart the current interval (e.g. after a restart)
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new(STEP_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_interval() {
        let mut clock = StepClock::default();
        assert_eq!(clock.advance(499), 0);
        assert_eq!(clock.remaining_ms(), 1);
        assert_eq!(clock.advance(1), 1);
        assert_eq!(clock.remaining_ms(), 500);
    }

    #[test]
    fn test_catches_up_after_stall() {
        let mut clock = StepClock::new(500);
        assert_eq!(clock.advance(1600), 3);
        assert_eq!(clock.remaining_ms(), 400);
    }

    #[test]
    fn test_reset_and_zero_interval() {
        let clock = StepClock::new(0);
        assert_eq!(clock.interval_ms(), 1);

        let mut clock = StepClock::new(100);
        clock.advance(90);
        clock.reset();
        assert_eq!(clock.advance(90), 0);
    }
}
