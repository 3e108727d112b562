//! RNG module - deterministic shape selection
//!
//! A small LCG so that a session is fully reproducible from its seed (tests,
//! benchmarks and replays of a bug report all rely on that). Shape selection
//! is uniform: every catalog entry is equally likely on every draw.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random index in range [0, len)
    ///
    /// Uses the high bits of the LCG output (multiply-shift); the low bits of
    /// a power-of-two LCG cycle with a very short period.
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((u64::from(self.next_u32()) * len as u64) >> 32) as usize
    }

    /// Current internal state (reported in logs so a game can be replayed)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
