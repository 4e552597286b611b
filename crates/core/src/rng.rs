//! RNG module - seedable tile placement randomness
//!
//! Spawning needs two draws per tile: which empty cell, and whether the
//! tile is a 2 or a 4. Both come from a small LCG so that a seed fully
//! determines a game (useful for tests and for replaying a session).

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
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

    /// Generate random value in range [0, max)
    ///
    /// Uses multiply-shift so the result depends on the high bits; the low
    /// bits of a power-of-two LCG cycle with a tiny period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Return true with the given probability in percent.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }
}
