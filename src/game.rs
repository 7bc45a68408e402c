use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    common::{GameError, GuessOutcome},
    config::MAX_INCORRECT,
    letters::{fold, LetterSet},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// `true` once no further guesses are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Classify `letter` against `target` without changing any state.
///
/// Spaces are always revealed, so guessing one is treated like a repeat.
pub fn evaluate_guess(target: &str, guessed: &LetterSet, letter: char) -> GuessOutcome {
    if letter.is_whitespace() || guessed.contains(letter) {
        GuessOutcome::AlreadyGuessed
    } else if target.chars().any(|c| fold(c) == fold(letter)) {
        GuessOutcome::Correct
    } else {
        GuessOutcome::Incorrect
    }
}

/// `true` when every non-space character of `target` has been guessed.
pub fn is_word_guessed(target: &str, guessed: &LetterSet) -> bool {
    target
        .chars()
        .filter(|c| !c.is_whitespace())
        .all(|c| guessed.contains(c))
}

/// Core game logic for a single session: the target word, the letters
/// revealed so far and the number of misses.
#[derive(Clone, Debug)]
pub struct GameEngine {
    target: String,
    guessed: LetterSet,
    incorrect: usize,
}

impl GameEngine {
    /// Start a session for `target`, revealing its first and last letters.
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let guessed = LetterSet::with_hint(&target);
        Self {
            target,
            guessed,
            incorrect: 0,
        }
    }

    /// The word being guessed.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Letters revealed so far.
    pub fn guessed(&self) -> &LetterSet {
        &self.guessed
    }

    /// Number of incorrect guesses made.
    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    /// Incorrect guesses left before the session is lost.
    pub fn remaining(&self) -> usize {
        MAX_INCORRECT.saturating_sub(self.incorrect)
    }

    /// Target characters in order, `None` for those still hidden. Spaces are
    /// always revealed.
    pub fn masked(&self) -> Vec<Option<char>> {
        self.target
            .chars()
            .map(|c| {
                if c.is_whitespace() || self.guessed.contains(c) {
                    Some(c)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Apply a guess and report how it was classified.
    ///
    /// Fails with [`GameError::GameOver`] once the session is won or lost,
    /// leaving the state untouched.
    pub fn guess(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        if self.status().is_terminal() {
            return Err(GameError::GameOver);
        }
        let outcome = evaluate_guess(&self.target, &self.guessed, letter);
        match outcome {
            GuessOutcome::AlreadyGuessed => {}
            GuessOutcome::Correct => {
                self.guessed.insert(letter);
            }
            GuessOutcome::Incorrect => {
                self.incorrect += 1;
            }
        }
        log::debug!(
            "guess '{}' -> {:?} (incorrect {}/{})",
            letter,
            outcome,
            self.incorrect,
            MAX_INCORRECT
        );
        Ok(outcome)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if is_word_guessed(&self.target, &self.guessed) {
            GameStatus::Won
        } else if self.incorrect >= MAX_INCORRECT {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}
