#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod game;
pub mod input;
mod letters;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod render;
#[cfg(feature = "std")]
mod session;
mod stage;
mod words;

pub use common::*;
pub use config::*;
pub use game::*;
pub use input::parse_letter;
#[cfg(feature = "std")]
pub use input::LetterReader;
pub use letters::{fold, LetterSet};
#[cfg(feature = "std")]
pub use logging::{format_record, init_logging, parse_level, LOG_ENV};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use render::*;
#[cfg(feature = "std")]
pub use session::*;
pub use stage::*;
pub use words::*;
