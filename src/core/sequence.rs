//! Sequence module - the ordered four-peg code
//!
//! A sequence is a fixed-length list of palette colors. The secret is drawn
//! once per game; guesses are built fresh each round from validated tokens.
//! There is no per-peg mutable state: scoring bookkeeping lives inside the
//! evaluator call (see `scoring`).

use crate::core::rng::SimpleRng;
use crate::types::{Color, PALETTE_SIZE, PEG_COUNT};

/// An ordered, fixed-length code of four pegs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    colors: [Color; PEG_COUNT],
}

impl Sequence {
    /// Create a sequence from already-validated colors
    pub fn new(colors: [Color; PEG_COUNT]) -> Self {
        Self { colors }
    }

    /// Draw a random sequence, each position independent and uniform
    /// over the palette (repeats across positions are expected)
    pub fn random(rng: &mut SimpleRng) -> Self {
        let mut colors = [Color::Red; PEG_COUNT];
        for slot in &mut colors {
            *slot = Color::ALL[rng.next_range(PALETTE_SIZE as u32) as usize];
        }
        Self { colors }
    }

    /// Get all peg colors in position order
    pub fn colors(&self) -> &[Color; PEG_COUNT] {
        &self.colors
    }
}
