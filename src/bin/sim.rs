use hangman::{pick_word, AiPlayer, GameEngine, GameStatus, Session, WordList};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// `<seed> [games]`, or `None` when the count or either value is wrong.
fn parse_args(args: &[String]) -> Option<(u64, usize)> {
    match args {
        [seed] => Some((seed.parse().ok()?, 1)),
        [seed, games] => Some((seed.parse().ok()?, games.parse().ok()?)),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    hangman::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("sim");
    let Some((seed, games)) = parse_args(args.get(1..).unwrap_or_default()) else {
        eprintln!("Usage: {} <seed> [games]", program);
        std::process::exit(1);
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let words = WordList::builtin();

    let mut results = Vec::with_capacity(games);
    for _ in 0..games {
        let target = pick_word(&words, &mut rng).to_string();
        let player = AiPlayer::new(words.clone());
        let mut session = Session::new(Box::new(player), GameEngine::new(target), std::io::sink());
        session.run(&mut rng)?;
        results.push(session.summary());
    }

    let won = results.iter().filter(|r| r.status == GameStatus::Won).count();
    let lost = results.iter().filter(|r| r.status == GameStatus::Lost).count();

    let result = json!({
        "seed": seed,
        "games": games,
        "won": won,
        "lost": lost,
        "results": results,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
