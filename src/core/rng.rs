//! RNG module - random secret generation
//!
//! A small LCG is all the game needs: secrets are not security-sensitive,
//! and a deterministic generator makes tests reproducible from a fixed seed.

use std::time::{SystemTime, UNIX_EPOCH};

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Derive a seed from the system clock.
///
/// No reproducibility contract is promised for live play; tests construct
/// `SimpleRng` from fixed seeds instead.
pub fn entropy_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ (elapsed.as_secs() as u32),
        // Clock before epoch: any fixed fallback works.
        Err(_) => 1,
    }
}
