//! Console input parsing and the line reader used by the input loop.

use crate::{common::InputError, letters::fold};

/// Turn one line of input into a lower-cased guess. Any single character is
/// accepted; one that is not in the word simply counts as a miss.
pub fn parse_letter(line: &str) -> Result<char, InputError> {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(fold(c)),
        _ => Err(InputError::WrongLength(trimmed.chars().count())),
    }
}

#[cfg(feature = "std")]
pub use reader::LetterReader;

#[cfg(feature = "std")]
mod reader {
    use std::io::BufRead;
    use std::string::String;

    use anyhow::Context;

    /// Line reader over a buffered input stream. Owned by the console player
    /// rather than shared process-wide so tests can substitute any `BufRead`.
    pub struct LetterReader<R> {
        inner: R,
        line: String,
    }

    impl<R: BufRead> LetterReader<R> {
        pub fn new(inner: R) -> Self {
            Self {
                inner,
                line: String::new(),
            }
        }

        /// Block until a full line arrives. End of stream is an error: a
        /// console game has nowhere else to read from.
        pub fn read_line(&mut self) -> anyhow::Result<&str> {
            self.line.clear();
            let n = self
                .inner
                .read_line(&mut self.line)
                .context("failed to read from input")?;
            if n == 0 {
                anyhow::bail!("input stream closed");
            }
            Ok(&self.line)
        }
    }
}
