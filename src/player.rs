use crate::{common::GuessOutcome, game::GameEngine};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next letter to guess given the visible game state.
    fn select_letter(&mut self, rng: &mut SmallRng, engine: &GameEngine) -> anyhow::Result<char>;

    /// Inform the player how its last guess was classified.
    fn handle_guess_result(&mut self, _letter: char, _outcome: GuessOutcome) {}
}
