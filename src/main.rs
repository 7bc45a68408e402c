#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use hangman::{init_logging, pick_word, AiPlayer, CliPlayer, GameEngine, Player, Session, WordList};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Guess the word one letter at a time", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(long, global = true, help = "Fix RNG seed for a reproducible word (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand, Clone, Copy)]
#[cfg(feature = "std")]
enum Commands {
    /// Guess letters from the console (default).
    Play,
    /// Watch the computer guess.
    Auto,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let words = WordList::builtin();
    let target = pick_word(&words, &mut rng).to_string();
    log::debug!("target word: {}", target);

    let player: Box<dyn Player> = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => Box::new(CliPlayer::new(io::stdin().lock(), io::stdout())),
        Commands::Auto => Box::new(AiPlayer::new(words.clone())),
    };

    let mut session = Session::new(player, GameEngine::new(target), io::stdout());
    session.run(&mut rng)?;
    Ok(())
}
