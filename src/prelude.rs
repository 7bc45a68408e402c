//! Commonly used types and utilities for ease of import.

pub use crate::{
    pick_word, AiPlayer, GameEngine, GameStatus, GuessOutcome, Player, WordList, MAX_INCORRECT,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer, Session};
