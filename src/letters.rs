//! Case-insensitive set of letters revealed so far.

use alloc::collections::BTreeSet;

/// Lower-case `c`, keeping it unchanged when it has no single-char lowercase.
pub fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Letters confirmed present in the target word. Stored folded; whitespace
/// is never a member.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterSet {
    letters: BTreeSet<char>,
}

impl LetterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the set with the first and last letters of `word`.
    pub fn with_hint(word: &str) -> Self {
        let mut set = Self::new();
        if let Some(first) = word.chars().next() {
            set.insert(first);
        }
        if let Some(last) = word.chars().next_back() {
            set.insert(last);
        }
        set
    }

    /// Add a letter. Returns `false` if it was already present or is whitespace.
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_whitespace() {
            return false;
        }
        self.letters.insert(fold(c))
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&fold(c))
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}
