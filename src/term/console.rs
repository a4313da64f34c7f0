//! Console: the line-oriented I/O collaborator.
//!
//! Supplies one color token per peg prompt and renders each round's result.
//! All game rules live in `core`; this layer only reads tokens and writes
//! styled text.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use crossterm::style::{Color as TermColor, Stylize};

use crate::core::{InvalidColorToken, Pin, Score};
use crate::types::{Color, PEG_COUNT, TOTAL_GUESSES};

/// Peg prompt labels, one per position.
const ORDINALS: [&str; PEG_COUNT] = ["1st", "2nd", "3rd", "4th"];

/// Map a palette color to a terminal color for styling.
fn tint(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::Green => TermColor::Green,
        Color::Blue => TermColor::Blue,
        Color::Yellow => TermColor::Yellow,
        Color::White => TermColor::White,
        Color::Orange => TermColor::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
    }
}

/// The palette as a styled, comma-separated list.
fn palette_list() -> String {
    let mut out = String::new();
    for (i, color) in Color::ALL.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if i + 1 == Color::ALL.len() {
            out.push_str("or ");
        }
        out.push_str(&format!("{}", color.as_str().with(tint(*color))));
    }
    out
}

/// Line-oriented console over a reader and a writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::BufReader<io::Stdin>, io::Stdout> {
    /// Console over the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Welcome text and the rules of the game
    pub fn intro(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Mastermind!")?;
        writeln!(
            self.output,
            "I've created a four peg code and it's your job to figure out what my code is."
        )?;
        writeln!(self.output, "Each peg can be {}.", palette_list())?;
        writeln!(
            self.output,
            "You get {} guesses to figure out my code!",
            TOTAL_GUESSES
        )?;
        writeln!(self.output, "After each guess, you will receive feedback.")?;
        writeln!(
            self.output,
            "A red pin means you guessed the correct color in the correct place."
        )?;
        writeln!(
            self.output,
            "A white pin means you guessed a correct color but NOT in the correct place."
        )?;
        writeln!(self.output, "Let's get started!")?;
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompt for one round's guess, one token per peg.
    ///
    /// Returns `None` on end of input.
    pub fn prompt_guess(&mut self, guesses_made: u32) -> Result<Option<[String; PEG_COUNT]>> {
        writeln!(self.output, "You have made {} guesses.", guesses_made)?;
        writeln!(
            self.output,
            "What is your guess? ({}, full name or first letter)",
            palette_list()
        )?;

        let mut tokens: [String; PEG_COUNT] = Default::default();
        for (i, slot) in tokens.iter_mut().enumerate() {
            write!(self.output, "{} peg? ", ORDINALS[i])?;
            self.output.flush()?;
            match self.read_line()? {
                Some(token) => *slot = token,
                None => return Ok(None),
            }
        }
        Ok(Some(tokens))
    }

    /// Render pin feedback for a non-terminal round
    pub fn show_feedback(&mut self, score: Score) -> Result<()> {
        write!(
            self.output,
            "You receive {} red pins and {} white pins.",
            score.exact, score.color_only
        )?;
        let pins = score.pins();
        if !pins.is_empty() {
            write!(self.output, "  ")?;
            for pin in pins {
                match pin {
                    Pin::Red => write!(self.output, "{}", "●".with(TermColor::Red))?,
                    Pin::White => write!(self.output, "{}", "●".with(TermColor::White))?,
                }
            }
        }
        writeln!(self.output)?;
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn show_win(&mut self, guesses_used: u32) -> Result<()> {
        writeln!(
            self.output,
            "{} You cracked the code in {} guesses!",
            "Congratulations!".bold(),
            guesses_used
        )?;
        self.output.flush()?;
        Ok(())
    }

    pub fn show_loss(&mut self) -> Result<()> {
        writeln!(self.output, "Sorry! You're all out of guesses!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Report a rejected token so the player can retry the round
    pub fn report_invalid(&mut self, err: &InvalidColorToken) -> Result<()> {
        writeln!(self.output, "{}. Let's try that guess again.", err)?;
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    /// Ask about replay. Anything but yes ends the session; so does EOF.
    pub fn ask_play_again(&mut self) -> Result<bool> {
        write!(self.output, "Would you like to play again? (y/n) ")?;
        self.output.flush()?;
        match self.read_line()? {
            Some(answer) => {
                let answer = answer.trim().to_lowercase();
                Ok(answer == "y" || answer == "yes")
            }
            None => Ok(false),
        }
    }

    /// Read one line, `None` on end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
