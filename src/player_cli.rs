#![cfg(feature = "std")]

use std::io::{BufRead, Write};

use rand::rngs::SmallRng;

use crate::{
    game::GameEngine,
    input::{parse_letter, LetterReader},
    player::Player,
};

/// Human player reading guesses from a console stream.
pub struct CliPlayer<R, W> {
    reader: LetterReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            reader: LetterReader::new(input),
            out,
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_letter(&mut self, _rng: &mut SmallRng, _engine: &GameEngine) -> anyhow::Result<char> {
        loop {
            write!(self.out, ">")?;
            self.out.flush()?;
            let line = self.reader.read_line()?;
            match parse_letter(line) {
                Ok(letter) => return Ok(letter),
                Err(e) => {
                    log::debug!("rejected input {:?}: {}", line.trim(), e);
                    writeln!(self.out, "Invalid input: {}", e)?;
                }
            }
        }
    }
}
