use hangman::{render_view, stage_art, word_progress, GameEngine, LetterSet, MAX_INCORRECT, STAGES};

#[test]
fn test_cat_progress() {
    let guessed: LetterSet = ['c', 't'].into_iter().collect();
    assert_eq!(word_progress("cat", &guessed), "c _ t");
}

#[test]
fn test_progress_preserves_case() {
    let guessed: LetterSet = ['g', 'r', 'o'].into_iter().collect();
    assert_eq!(word_progress("Gopher", &guessed), "G o _ _ _ r");
}

#[test]
fn test_progress_shows_spaces() {
    let guessed: LetterSet = ['u', 'a'].into_iter().collect();
    assert_eq!(word_progress("United States", &guessed), "U _ _ _ _ _   _ _ a _ _ _ _");
}

#[test]
fn test_progress_empty_guesses() {
    assert_eq!(word_progress("abc", &LetterSet::new()), "_ _ _");
}

#[test]
fn test_stage_table_matches_limit() {
    assert_eq!(STAGES.len(), MAX_INCORRECT + 1);
    assert_eq!(MAX_INCORRECT, 9);
    assert_eq!(stage_art(0), "");
}

#[test]
fn test_stages_grow() {
    for i in 1..STAGES.len() {
        assert!(
            stage_art(i).len() >= stage_art(i - 1).len(),
            "stage {} is smaller than stage {}",
            i,
            i - 1
        );
        assert_ne!(stage_art(i), stage_art(i - 1));
    }
}

#[test]
fn test_stage_clamps() {
    let last = STAGES[STAGES.len() - 1];
    assert_eq!(stage_art(MAX_INCORRECT), last);
    assert_eq!(stage_art(MAX_INCORRECT + 1), last);
    assert_eq!(stage_art(usize::MAX), last);
    assert!(last.contains("/ | \\"));
}

#[test]
fn test_render_view_layout() {
    let mut engine = GameEngine::new("cat");
    engine.guess('x').unwrap();
    let view = render_view(&engine);
    let expected = format!("c _ t\n\n{}", stage_art(1));
    assert_eq!(view, expected);
}
