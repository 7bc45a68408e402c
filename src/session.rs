#![cfg(feature = "std")]

use std::boxed::Box;
use std::io::Write;
use std::string::{String, ToString};

use rand::rngs::SmallRng;

use crate::{
    common::GuessOutcome,
    game::{GameEngine, GameStatus},
    player::Player,
    render::render_view,
};

/// Outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GameSummary {
    pub word: String,
    pub status: GameStatus,
    pub incorrect: usize,
    pub turns: usize,
}

/// Drives one game: asks the player for letters, applies them to the engine
/// and writes the board after every turn.
pub struct Session<'a, W: Write> {
    player: Box<dyn Player + 'a>,
    engine: GameEngine,
    out: W,
    turns: usize,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(player: Box<dyn Player + 'a>, engine: GameEngine, out: W) -> Self {
        Self {
            player,
            engine,
            out,
            turns: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Number of guesses accepted so far, repeats included.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Play until the game is won or lost.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<GameStatus> {
        while !self.engine.status().is_terminal() {
            writeln!(self.out, "{}", render_view(&self.engine))?;
            let letter = self.player.select_letter(rng, &self.engine)?;
            let outcome = self.engine.guess(letter).map_err(|e| anyhow::anyhow!(e))?;
            self.turns += 1;
            self.player.handle_guess_result(letter, outcome);
            match outcome {
                GuessOutcome::AlreadyGuessed => {
                    writeln!(self.out, "You already guessed '{}'", letter)?
                }
                GuessOutcome::Correct => writeln!(self.out, "'{}' is in the word", letter)?,
                GuessOutcome::Incorrect => writeln!(
                    self.out,
                    "'{}' is not in the word ({} left)",
                    letter,
                    self.engine.remaining()
                )?,
            }
        }

        let status = self.engine.status();
        writeln!(self.out, "{}", render_view(&self.engine))?;
        write!(self.out, "Game Over........")?;
        match status {
            GameStatus::Won => writeln!(self.out, "You Win!")?,
            _ => {
                writeln!(self.out, "You Lose!")?;
                writeln!(self.out, "The word was: {}", self.engine.target())?;
            }
        }
        self.out.flush()?;
        log::info!(
            "game over: {:?} after {} turns ({} incorrect)",
            status,
            self.turns,
            self.engine.incorrect()
        );
        Ok(status)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            word: self.engine.target().to_string(),
            status: self.engine.status(),
            incorrect: self.engine.incorrect(),
            turns: self.turns,
        }
    }
}
