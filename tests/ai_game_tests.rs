use hangman::{best_letter, AiPlayer, GameEngine, GameStatus, GuessOutcome, Player, Session, WordList};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

#[test]
fn test_ai_wins_every_builtin_word() {
    let words = WordList::builtin();
    for word in words.iter() {
        let mut rng = SmallRng::seed_from_u64(123);
        let player = AiPlayer::new(words.clone());
        let mut session = Session::new(Box::new(player), GameEngine::new(word), std::io::sink());
        let status = session.run(&mut rng).unwrap();
        assert_eq!(status, GameStatus::Won, "AI failed on {}", word);
        assert_eq!(session.engine().incorrect(), 0, "AI missed on {}", word);
    }
}

#[test]
fn test_ai_never_repeats_a_letter() {
    let words = WordList::builtin();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut ai = AiPlayer::new(words);
    // not in the list, so the AI falls back to letter frequency
    let mut engine = GameEngine::new("rhythm");
    let mut tried = Vec::new();
    while !engine.status().is_terminal() {
        let letter = ai.select_letter(&mut rng, &engine).unwrap();
        assert!(!tried.contains(&letter), "repeated {}", letter);
        tried.push(letter);
        let outcome = engine.guess(letter).unwrap();
        assert_ne!(outcome, GuessOutcome::AlreadyGuessed);
        ai.handle_guess_result(letter, outcome);
    }
    assert_eq!(ai.misses().len(), engine.incorrect());
}

#[test]
fn test_fallback_follows_letter_frequency() {
    let words = WordList::new(["zzzz"]).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut ai = AiPlayer::new(words);
    let engine = GameEngine::new("bob");
    assert_eq!(ai.select_letter(&mut rng, &engine).unwrap(), 'e');
    ai.handle_guess_result('e', GuessOutcome::Incorrect);
    assert_eq!(ai.select_letter(&mut rng, &engine).unwrap(), 't');
}

#[test]
fn test_best_letter_prefers_count_then_frequency() {
    let mut counts = BTreeMap::new();
    counts.insert('z', 3);
    counts.insert('e', 2);
    assert_eq!(best_letter(&counts), Some('z'));
    counts.insert('e', 3);
    assert_eq!(best_letter(&counts), Some('e'));
    assert_eq!(best_letter(&BTreeMap::new()), None);
}
