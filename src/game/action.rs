//! User actions and the transition function that applies them

use super::{GameState, SubmitError};
use crate::wordlists::WordList;
use rand::Rng;

/// One user input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a letter to the current input
    Type(char),
    Backspace,
    Clear,
    /// Submit the current input as a guess
    Submit,
    /// Pick a new target and reset everything
    NewGame,
}

/// Apply an action to a state, returning the next state
///
/// Rejected submissions keep the guesses and input and put the error text in
/// the message. `rng` is only drawn from by [`Action::NewGame`].
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_clone::core::Word;
/// use wordle_clone::game::{Action, GameConfig, GameState, apply};
/// use wordle_clone::wordlists::WordList;
///
/// let words = WordList::from_strs(&["apple", "angle"]).unwrap();
/// let mut rng = StdRng::seed_from_u64(0);
/// let mut state = GameState::new(Word::new("apple").unwrap(), GameConfig::default());
///
/// for action in [Action::Type('a'), Action::Type('b'), Action::Submit] {
///     state = apply(&state, action, &words, &mut rng);
/// }
/// assert_eq!(state.message(), "Word length mismatch!");
/// assert_eq!(state.current_input(), "ab");
/// ```
pub fn apply<R: Rng>(state: &GameState, action: Action, words: &WordList, rng: &mut R) -> GameState {
    match action {
        Action::Type(ch) => state.with_letter(ch),
        Action::Backspace => state.with_backspace(),
        Action::Clear => state.with_cleared_input(),
        Action::Submit => match state.submit_guess(state.current_input(), words) {
            Ok(next) => next,
            Err(SubmitError::GameOver) => state.clone(),
            Err(err) => {
                log::info!("Rejected guess '{}': {err}", state.current_input());
                state.with_message(err.to_string())
            }
        },
        Action::NewGame => {
            log::debug!("Starting new game");
            GameState::start(words, state.config(), rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameConfig, GameStatus};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup() -> (WordList, StdRng, GameState) {
        let words = WordList::from_strs(&[
            "apple", "angle", "crane", "slate", "plead", "light", "might",
        ])
        .unwrap();
        let state = GameState::new(Word::new("apple").unwrap(), GameConfig::default());
        (words, StdRng::seed_from_u64(11), state)
    }

    fn run(
        state: &GameState,
        actions: impl IntoIterator<Item = Action>,
        words: &WordList,
        rng: &mut StdRng,
    ) -> GameState {
        actions
            .into_iter()
            .fold(state.clone(), |s, a| apply(&s, a, words, rng))
    }

    fn typed(word: &str) -> Vec<Action> {
        let mut actions: Vec<Action> = word.chars().map(Action::Type).collect();
        actions.push(Action::Submit);
        actions
    }

    #[test]
    fn typed_guess_is_submitted() {
        let (words, mut rng, state) = setup();
        let next = run(&state, typed("angle"), &words, &mut rng);
        assert_eq!(next.guesses().len(), 1);
        assert_eq!(next.current_input(), "");
    }

    #[test]
    fn rejected_guess_keeps_input_and_sets_message() {
        let (words, mut rng, state) = setup();
        let next = run(&state, typed("zzzzz"), &words, &mut rng);
        assert!(next.guesses().is_empty());
        assert_eq!(next.current_input(), "zzzzz");
        assert_eq!(next.message(), "Not in word list");
    }

    #[test]
    fn message_persists_while_editing() {
        let (words, mut rng, state) = setup();
        let next = run(&state, typed("zzzzz"), &words, &mut rng);
        let next = run(&next, [Action::Backspace, Action::Clear], &words, &mut rng);
        assert_eq!(next.current_input(), "");
        assert_eq!(next.message(), "Not in word list");
    }

    #[test]
    fn submit_after_win_changes_nothing() {
        let (words, mut rng, state) = setup();
        let won = run(&state, typed("apple"), &words, &mut rng);
        assert_eq!(won.status(), GameStatus::Won);

        let after = run(&won, typed("angle"), &words, &mut rng);
        assert_eq!(after, won);
    }

    #[test]
    fn new_game_after_loss_resets() {
        let (words, mut rng, state) = setup();
        let mut lost = state;
        for guess in ["angle", "crane", "slate", "plead", "light", "might"] {
            lost = run(&lost, typed(guess), &words, &mut rng);
        }
        assert_eq!(lost.status(), GameStatus::Lost);

        let fresh = apply(&lost, Action::NewGame, &words, &mut rng);
        assert!(fresh.guesses().is_empty());
        assert_eq!(fresh.message(), "");
        assert_eq!(fresh.current_input(), "");
        assert_eq!(fresh.status(), GameStatus::InProgress);
        assert!(words.contains(fresh.target().text()));
    }

    #[test]
    fn new_game_keeps_config() {
        let (words, mut rng, _) = setup();
        let state = GameState::new(
            Word::new("apple").unwrap(),
            GameConfig::with_max_attempts(3),
        );
        let fresh = apply(&state, Action::NewGame, &words, &mut rng);
        assert_eq!(fresh.max_attempts(), 3);
    }
}
