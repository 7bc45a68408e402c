//! Text rendering of the game state.

use alloc::string::String;

use crate::{
    config::PLACEHOLDER,
    game::GameEngine,
    letters::LetterSet,
    stage::stage_art,
};

/// Show `target` with unguessed letters replaced by the placeholder, one
/// space between characters. Spaces in the word are always shown.
pub fn word_progress(target: &str, guessed: &LetterSet) -> String {
    let mut out = String::with_capacity(target.len() * 2);
    for (i, ch) in target.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if ch.is_whitespace() || guessed.contains(ch) {
            out.push(ch);
        } else {
            out.push(PLACEHOLDER);
        }
    }
    out
}

/// Word progress, a blank line, then the drawing for the current miss count.
pub fn render_view(engine: &GameEngine) -> String {
    let mut out = word_progress(engine.target(), engine.guessed());
    out.push_str("\n\n");
    out.push_str(stage_art(engine.incorrect()));
    out
}
