//! Session module - the per-game state machine
//!
//! A session owns the secret and the guess counter. It accepts raw tokens
//! from the input collaborator, normalizes them through the `Color` model,
//! rejects invalid ones before a guess is consumed, and surfaces a
//! structured result per round for the output collaborator to render.

use std::fmt;

use crate::core::rng::SimpleRng;
use crate::core::scoring::{score_guess, Score};
use crate::core::sequence::Sequence;
use crate::types::{Color, PEG_COUNT, TOTAL_GUESSES};

/// Where the current game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// The structured record surfaced to the output collaborator each round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// Game continues: pin feedback for this guess.
    Feedback(Score),
    /// All four pegs exact.
    Won { guesses_used: u32 },
    /// Guess budget exhausted without a win.
    Lost,
}

/// A guess token that normalizes to no palette color or alias
///
/// Raised before the guess counter moves, so the input collaborator can
/// re-prompt the round. `position` is 1-based for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColorToken {
    pub token: String,
    pub position: usize,
}

impl fmt::Display for InvalidColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" is not a color I know (peg {})",
            self.token, self.position
        )
    }
}

impl std::error::Error for InvalidColorToken {}

/// Complete state for one player's session
///
/// Single-threaded and turn-based: one driver loop owns the session for its
/// whole lifetime. The secret stays private to this struct; nothing exposes
/// it in cleartext during play.
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Sequence,
    /// Advanced on every secret draw so restarts get fresh codes.
    rng: SimpleRng,
    current_guess: u32,
    total_guesses: u32,
    outcome: Outcome,
}

impl GameSession {
    /// Create a new session with the given RNG seed and a random secret
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let secret = Sequence::random(&mut rng);

        Self {
            secret,
            rng,
            current_guess: 0,
            total_guesses: TOTAL_GUESSES,
            outcome: Outcome::InProgress,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Guesses made so far in the current game
    pub fn current_guess(&self) -> u32 {
        self.current_guess
    }

    pub fn total_guesses(&self) -> u32 {
        self.total_guesses
    }

    /// Normalize a raw token: trim it, then parse through the color model
    pub fn normalize_token(&self, token: &str) -> Option<Color> {
        Color::from_token(token.trim())
    }

    /// Submit one round's guess as raw tokens.
    ///
    /// All four tokens are validated before the guess counter moves; an
    /// invalid token rejects the whole round so the input collaborator can
    /// re-prompt. On a finished game the terminal result is returned again
    /// without consuming a guess.
    pub fn submit_guess(
        &mut self,
        tokens: &[String; PEG_COUNT],
    ) -> Result<RoundResult, InvalidColorToken> {
        match self.outcome {
            Outcome::Won => {
                return Ok(RoundResult::Won {
                    guesses_used: self.current_guess,
                })
            }
            Outcome::Lost => return Ok(RoundResult::Lost),
            Outcome::InProgress => {}
        }

        let mut colors = [Color::Red; PEG_COUNT];
        for (i, token) in tokens.iter().enumerate() {
            colors[i] = self.normalize_token(token).ok_or_else(|| InvalidColorToken {
                token: token.trim().to_string(),
                position: i + 1,
            })?;
        }

        self.current_guess += 1;
        let guess = Sequence::new(colors);
        let score = score_guess(&self.secret, &guess);

        if score.is_win() {
            self.outcome = Outcome::Won;
            Ok(RoundResult::Won {
                guesses_used: self.current_guess,
            })
        } else if self.current_guess == self.total_guesses {
            self.outcome = Outcome::Lost;
            Ok(RoundResult::Lost)
        } else {
            Ok(RoundResult::Feedback(score))
        }
    }

    /// Start a fresh game: redraw the secret and reset the guess counter
    pub fn restart(&mut self) {
        self.secret = Sequence::random(&mut self.rng);
        self.current_guess = 0;
        self.outcome = Outcome::InProgress;
    }

    #[cfg(test)]
    pub fn secret(&self) -> &Sequence {
        &self.secret
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: [&str; PEG_COUNT]) -> [String; PEG_COUNT] {
        raw.map(str::to_string)
    }

    fn secret_tokens(session: &GameSession) -> [String; PEG_COUNT] {
        session.secret().colors().map(|c| c.as_str().to_string())
    }

    /// A guess that differs from the secret at every position.
    fn wrong_tokens(session: &GameSession) -> [String; PEG_COUNT] {
        session.secret().colors().map(|c| {
            let next = Color::ALL[(c.index() + 1) % Color::ALL.len()];
            next.as_str().to_string()
        })
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(12345);

        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.current_guess(), 0);
        assert_eq!(session.total_guesses(), TOTAL_GUESSES);
    }

    #[test]
    fn test_normalize_token_covers_names_and_first_letters() {
        let session = GameSession::new(1);

        for color in Color::ALL {
            assert_eq!(session.normalize_token(color.as_str()), Some(color));
            let alias: String = color.as_str().chars().take(1).collect();
            assert_eq!(session.normalize_token(&alias), Some(color));
        }
    }

    #[test]
    fn test_normalization_trims_and_ignores_case() {
        let session = GameSession::new(1);

        assert_eq!(session.normalize_token("RED"), Some(Color::Red));
        assert_eq!(session.normalize_token("  red "), Some(Color::Red));
        assert_eq!(session.normalize_token("R"), Some(Color::Red));
        assert_eq!(session.normalize_token("purple"), None);
    }

    #[test]
    fn test_correct_guess_wins() {
        let mut session = GameSession::new(12345);
        let guess = secret_tokens(&session);

        let result = session.submit_guess(&guess).unwrap();
        assert_eq!(result, RoundResult::Won { guesses_used: 1 });
        assert_eq!(session.outcome(), Outcome::Won);
    }

    #[test]
    fn test_wrong_guess_surfaces_feedback() {
        let mut session = GameSession::new(12345);
        let guess = wrong_tokens(&session);

        let result = session.submit_guess(&guess).unwrap();
        match result {
            RoundResult::Feedback(score) => {
                // Differs at every position, so no exact matches.
                assert_eq!(score.exact, 0);
            }
            other => panic!("expected feedback, got {:?}", other),
        }
        assert_eq!(session.current_guess(), 1);
        assert_eq!(session.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_budget_exhaustion_loses() {
        let mut session = GameSession::new(12345);
        let guess = wrong_tokens(&session);

        for i in 1..TOTAL_GUESSES {
            let result = session.submit_guess(&guess).unwrap();
            assert!(matches!(result, RoundResult::Feedback(_)));
            assert_eq!(session.current_guess(), i);
        }

        let result = session.submit_guess(&guess).unwrap();
        assert_eq!(result, RoundResult::Lost);
        assert_eq!(session.outcome(), Outcome::Lost);
    }

    #[test]
    fn test_terminal_session_consumes_no_guesses() {
        let mut session = GameSession::new(12345);
        let winning = secret_tokens(&session);

        session.submit_guess(&winning).unwrap();
        assert_eq!(session.current_guess(), 1);

        // Further submissions return the terminal result unchanged.
        let result = session.submit_guess(&winning).unwrap();
        assert_eq!(result, RoundResult::Won { guesses_used: 1 });
        assert_eq!(session.current_guess(), 1);
    }

    #[test]
    fn test_invalid_token_rejects_whole_round() {
        let mut session = GameSession::new(12345);

        let err = session
            .submit_guess(&tokens(["red", "purple", "blue", "green"]))
            .unwrap_err();
        assert_eq!(err.token, "purple");
        assert_eq!(err.position, 2);

        // The round was not consumed.
        assert_eq!(session.current_guess(), 0);
        assert_eq!(session.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_restart_redraws_secret_and_resets_counter() {
        let mut session = GameSession::new(12345);
        let first_secret = *session.secret();
        session.submit_guess(&wrong_tokens(&session)).unwrap();

        session.restart();

        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.current_guess(), 0);
        // Redrawn from an advanced RNG; differs for this seed.
        assert_ne!(*session.secret(), first_secret);
    }

    #[test]
    fn test_restart_after_loss_allows_play() {
        let mut session = GameSession::new(777);
        for _ in 0..TOTAL_GUESSES {
            session.submit_guess(&wrong_tokens(&session)).unwrap();
        }
        assert_eq!(session.outcome(), Outcome::Lost);

        session.restart();
        let result = session.submit_guess(&secret_tokens(&session)).unwrap();
        assert_eq!(result, RoundResult::Won { guesses_used: 1 });
    }
}
