use crate::stage::STAGES;

/// Words the game draws from when no other list is supplied.
pub const DICTIONARY: [&str; 7] = [
    "Zombie",
    "Gopher",
    "United States of America",
    "Indonesia",
    "Nazism",
    "Apple",
    "Programming",
];

/// Incorrect guesses allowed before the session is lost. One per stage of the
/// drawing after the empty gallows.
pub const MAX_INCORRECT: usize = STAGES.len() - 1;

/// Glyph shown in place of a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '_';
