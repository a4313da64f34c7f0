//! Core module - pure game logic with no external dependencies
//!
//! This module contains the code sequence model, the guess evaluator, and
//! the session state machine. It has zero dependencies on UI or I/O.

pub mod rng;
pub mod scoring;
pub mod sequence;
pub mod session;

// Re-export commonly used types
pub use rng::{entropy_seed, SimpleRng};
pub use scoring::{score_guess, Pin, Score};
pub use sequence::Sequence;
pub use session::{GameSession, InvalidColorToken, Outcome, RoundResult};
