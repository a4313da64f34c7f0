//! Terminal Mastermind runner (default binary).
//!
//! Wires the line-oriented console to a game session: prompt for four color
//! tokens, score the round, repeat until the game ends, then offer a replay.

use std::io::{BufRead, Write};

use anyhow::Result;

use term_mastermind::core::{entropy_seed, GameSession, RoundResult};
use term_mastermind::term::Console;

fn main() -> Result<()> {
    let mut console = Console::stdio();
    run(&mut console)
}

fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let mut session = GameSession::new(entropy_seed());
    console.intro()?;

    loop {
        let Some(tokens) = console.prompt_guess(session.current_guess())? else {
            // Input closed mid-game; nothing to clean up.
            return Ok(());
        };

        let result = match session.submit_guess(&tokens) {
            Ok(result) => result,
            Err(err) => {
                // Rejected before the guess counter moved; redo the round.
                console.report_invalid(&err)?;
                continue;
            }
        };

        match result {
            RoundResult::Feedback(score) => console.show_feedback(score)?,
            RoundResult::Won { guesses_used } => {
                console.show_win(guesses_used)?;
                if !console.ask_play_again()? {
                    return Ok(());
                }
                session.restart();
            }
            RoundResult::Lost => {
                console.show_loss()?;
                if !console.ask_play_again()? {
                    return Ok(());
                }
                session.restart();
            }
        }
    }
}
