//! Word lists and random word selection.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::{common::WordListError, config::DICTIONARY};

/// Non-empty, immutable list of candidate words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list, rejecting an empty list or blank entries.
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        if let Some(idx) = words.iter().position(|w| w.trim().is_empty()) {
            return Err(WordListError::BlankWord(idx));
        }
        Ok(Self { words })
    }

    /// The built-in dictionary.
    pub fn builtin() -> Self {
        Self {
            words: DICTIONARY.iter().map(|&w| w.to_owned()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.words.get(idx).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Pick one word uniformly at random from `list`.
pub fn pick_word<'a, R: Rng>(list: &'a WordList, rng: &mut R) -> &'a str {
    let idx = rng.random_range(0..list.words.len());
    &list.words[idx]
}
