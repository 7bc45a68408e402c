//! Common types for Hangman: guess outcomes and errors.

/// Result of evaluating a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter was already revealed; nothing changed.
    AlreadyGuessed,
    /// Letter occurs in the target word and is now revealed.
    Correct,
    /// Letter does not occur in the target word.
    Incorrect,
}

/// Errors returned by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The session already reached `Won` or `Lost`.
    GameOver,
}

/// Reasons a line of console input is not a usable guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Trimmed input did not contain exactly one character.
    WrongLength(usize),
}

/// Errors building a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListError {
    /// No words were supplied.
    Empty,
    /// Word at this index is empty or only whitespace.
    BlankWord(usize),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::WrongLength(n) => {
                write!(f, "Expected a single letter, got {} characters", n)
            }
        }
    }
}

impl core::fmt::Display for WordListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WordListError::Empty => write!(f, "Word list is empty"),
            WordListError::BlankWord(i) => write!(f, "Word at index {} is blank", i),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
#[cfg(feature = "std")]
impl std::error::Error for WordListError {}
