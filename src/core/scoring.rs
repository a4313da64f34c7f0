//! Scoring module - classic Mastermind guess evaluation
//!
//! Scoring runs in two passes. The exact pass must finish before the
//! color-only pass starts, because positions credited as exact matches are
//! excluded from color matching. The color-only pass consumes a secret peg
//! as it counts it (per-color frequency decrement), so a secret peg never
//! credits more than one white pin even when the guess repeats its color.

use arrayvec::ArrayVec;

use crate::core::sequence::Sequence;
use crate::types::{PALETTE_SIZE, PEG_COUNT};

/// Feedback for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Red pins: right color in the right position.
    pub exact: u8,
    /// White pins: right color, wrong position.
    pub color_only: u8,
}

/// One feedback pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pin {
    Red,
    White,
}

impl Score {
    /// Whether this score wins the game (all pegs exact)
    pub fn is_win(&self) -> bool {
        self.exact as usize == PEG_COUNT
    }

    /// Expand the counts into a row of pins, red pins first.
    ///
    /// At most `PEG_COUNT` pins exist because each peg position credits at
    /// most one bucket.
    pub fn pins(&self) -> ArrayVec<Pin, PEG_COUNT> {
        let mut pins = ArrayVec::new();
        for _ in 0..self.exact {
            pins.push(Pin::Red);
        }
        for _ in 0..self.color_only {
            pins.push(Pin::White);
        }
        pins
    }
}

/// Evaluate a guess against the secret.
///
/// Pure function: all bookkeeping is local to the call. Both sequences are
/// fixed-length arrays of palette colors, so there is no malformed input to
/// reject here.
pub fn score_guess(secret: &Sequence, guess: &Sequence) -> Score {
    let secret = secret.colors();
    let guess = guess.colors();

    // Exact pass: runs to completion before any color matching.
    let mut exact = 0u8;
    let mut exact_at = [false; PEG_COUNT];
    for i in 0..PEG_COUNT {
        if secret[i] == guess[i] {
            exact += 1;
            exact_at[i] = true;
        }
    }

    // Tally the secret colors the exact pass left unclaimed.
    let mut remaining = [0u8; PALETTE_SIZE];
    for i in 0..PEG_COUNT {
        if !exact_at[i] {
            remaining[secret[i].index()] += 1;
        }
    }

    // Color-only pass: each match consumes one remaining secret peg.
    let mut color_only = 0u8;
    for j in 0..PEG_COUNT {
        if exact_at[j] {
            continue;
        }
        let slot = &mut remaining[guess[j].index()];
        if *slot > 0 {
            *slot -= 1;
            color_only += 1;
        }
    }

    Score { exact, color_only }
}
