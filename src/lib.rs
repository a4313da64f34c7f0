//! Terminal Mastermind.
//!
//! Pure game rules live in [`core`] (sequence model, guess evaluator,
//! session state machine); [`term`] is the thin line-oriented console
//! collaborator; [`types`] holds the shared palette and constants.

pub mod core;
pub mod term;
pub mod types;
