//! ASCII drawings of the gallows, one per incorrect guess.

/// Drawing for each incorrect-guess count. Index 0 is the empty stage and the
/// last entry is the complete figure.
pub const STAGES: [&str; 10] = [
    "",
    r"-
|
|
|
|",
    r"-----------
|
|
|
|",
    r"-----------
|       |
|
|
|",
    r"-----------
|       |
|       0
|
|",
    r"-----------
|       |
|       0
|     /
|",
    r"-----------
|       |
|       0
|     / |
|",
    r"-----------
|       |
|       0
|     / | \
|",
    r"-----------
|       |
|       0
|     / | \
|      /
|",
    r"-----------
|       |
|       0
|     / | \
|      / \
|",
];

/// Drawing for `incorrect` misses. Counts past the table show the final stage.
pub fn stage_art(incorrect: usize) -> &'static str {
    STAGES[incorrect.min(STAGES.len() - 1)]
}
