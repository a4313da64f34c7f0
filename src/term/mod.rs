//! Terminal console module.
//!
//! Line-oriented console collaborator for the game: prompts for one color
//! token per peg, renders pin feedback with a little color, and asks about
//! replay. No raw mode and no alternate screen; the game is plain
//! prompt-and-answer.
//!
//! The console is generic over its reader and writer so prompting and
//! rendering can be unit-tested against in-memory buffers.

pub mod console;

pub use console::Console;
