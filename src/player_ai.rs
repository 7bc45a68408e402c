// Frequency-based letter picker for automatic play.
// Narrows the word list to words consistent with what has been revealed.

use alloc::collections::BTreeMap;
use rand::rngs::SmallRng;

use crate::{
    common::GuessOutcome,
    game::GameEngine,
    letters::{fold, LetterSet},
    player::Player,
    words::WordList,
};

/// English letters from most to least frequent. Used to break ties and when
/// no candidate word fits.
pub const LETTER_FREQUENCY: &str = "etaoinshrdlcumwfgypbvkjxqz";

pub struct AiPlayer {
    words: WordList,
    misses: LetterSet,
}

impl AiPlayer {
    pub fn new(words: WordList) -> Self {
        Self {
            words,
            misses: LetterSet::new(),
        }
    }

    /// Letters this player guessed that were not in the word.
    pub fn misses(&self) -> &LetterSet {
        &self.misses
    }

    fn fits(&self, word: &str, masked: &[Option<char>], guessed: &LetterSet) -> bool {
        if word.chars().count() != masked.len() {
            return false;
        }
        word.chars().zip(masked).all(|(wc, slot)| match slot {
            Some(c) => fold(wc) == fold(*c),
            None => !wc.is_whitespace() && !guessed.contains(wc) && !self.misses.contains(wc),
        })
    }
}

/// Rank of `c` in [`LETTER_FREQUENCY`]; unknown characters sort last.
fn frequency_rank(c: char) -> usize {
    LETTER_FREQUENCY
        .chars()
        .position(|f| f == c)
        .unwrap_or(LETTER_FREQUENCY.len())
}

/// Pick the letter appearing in the most candidate words' hidden positions.
pub fn best_letter(counts: &BTreeMap<char, usize>) -> Option<char> {
    counts
        .iter()
        .max_by(|(a, na), (b, nb)| {
            na.cmp(nb)
                .then_with(|| frequency_rank(**b).cmp(&frequency_rank(**a)))
        })
        .map(|(&c, _)| c)
}

impl Player for AiPlayer {
    fn select_letter(&mut self, _rng: &mut SmallRng, engine: &GameEngine) -> anyhow::Result<char> {
        let masked = engine.masked();
        let guessed = engine.guessed();

        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for word in self.words.iter() {
            if !self.fits(word, &masked, guessed) {
                continue;
            }
            // count each letter once per candidate word
            let mut seen = LetterSet::new();
            for (wc, slot) in word.chars().zip(&masked) {
                if slot.is_none() && seen.insert(wc) {
                    *counts.entry(fold(wc)).or_insert(0) += 1;
                }
            }
        }
        if let Some(letter) = best_letter(&counts) {
            return Ok(letter);
        }

        LETTER_FREQUENCY
            .chars()
            .find(|&c| !guessed.contains(c) && !self.misses.contains(c))
            .ok_or_else(|| anyhow::anyhow!("no letters left to guess"))
    }

    fn handle_guess_result(&mut self, letter: char, outcome: GuessOutcome) {
        if outcome == GuessOutcome::Incorrect {
            self.misses.insert(letter);
        }
    }
}
