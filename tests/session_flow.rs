use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_clone::core::{LetterState, Word};
use wordle_clone::game::{Action, GameConfig, GameState, GameStatus, apply};
use wordle_clone::wordlists::loader;

fn typed(word: &str) -> impl Iterator<Item = Action> + '_ {
    word.chars().map(Action::Type).chain([Action::Submit])
}

#[test]
fn full_game_on_embedded_list() {
    let words = loader::embedded().unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut state = GameState::new(Word::new("apple").unwrap(), GameConfig::default());

    for action in typed("angle") {
        state = apply(&state, action, &words, &mut rng);
    }
    assert_eq!(
        state.guesses()[0].result.states(),
        &[
            LetterState::Correct,
            LetterState::Absent,
            LetterState::Absent,
            LetterState::Correct,
            LetterState::Correct
        ]
    );

    let keyboard = state.keyboard();
    assert_eq!(keyboard.get(b'a'), Some(LetterState::Correct));
    assert_eq!(keyboard.get(b'n'), Some(LetterState::Absent));

    for action in typed("apple") {
        state = apply(&state, action, &words, &mut rng);
    }
    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(state.message(), "🎉 You won!");
}

#[test]
fn losing_then_new_game() {
    let words = loader::embedded().unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let mut state = GameState::new(Word::new("apple").unwrap(), GameConfig::default());

    for guess in ["crane", "slate", "light", "night", "might", "sight"] {
        for action in typed(guess) {
            state = apply(&state, action, &words, &mut rng);
        }
    }
    assert_eq!(state.status(), GameStatus::Lost);
    assert_eq!(state.message(), "Game over! Word: apple");

    state = apply(&state, Action::NewGame, &words, &mut rng);
    assert!(state.guesses().is_empty());
    assert_eq!(state.message(), "");
    assert_eq!(state.status(), GameStatus::InProgress);
}

#[test]
fn seeded_games_pick_the_same_targets() {
    let words = loader::embedded().unwrap();
    let targets = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..5)
            .map(|_| {
                GameState::start(&words, GameConfig::default(), &mut rng)
                    .target()
                    .clone()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(targets(77), targets(77));
}
