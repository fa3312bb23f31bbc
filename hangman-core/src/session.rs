use std::collections::BTreeSet;

use hangman_types::{HangmanError, PLACEHOLDER, SessionState, UserId, Word, WordId};

use crate::GameRules;

/// Emitted once, on the transition into `Won` or `Lost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeEvent {
    pub user_id: Option<UserId>,
    pub word_id: WordId,
    pub solved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessEffect {
    /// Repeat letter, non-letter, or the round is already over.
    Ignored,
    Hit { positions: Vec<usize> },
    Miss { miss_count: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub effect: GuessEffect,
    pub outcome: Option<OutcomeEvent>,
}

impl GuessReport {
    fn ignored() -> Self {
        Self {
            effect: GuessEffect::Ignored,
            outcome: None,
        }
    }
}

/// State of a single round. Holds no I/O handles; the controller decides
/// what to do with the outcome it reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    user_id: Option<UserId>,
    word: Word,
    target: Vec<char>,
    revealed: Vec<char>,
    miss_count: u32,
    miss_limit: u32,
    guessed_letters: BTreeSet<char>,
    state: SessionState,
}

impl GameSession {
    pub fn new(user_id: Option<UserId>, word: Word, rules: &GameRules) -> Self {
        let target: Vec<char> = word.text.chars().map(canonical).collect();
        let revealed = vec![PLACEHOLDER; target.len()];

        Self {
            user_id,
            word,
            target,
            revealed,
            miss_count: 0,
            miss_limit: rules.miss_limit,
            guessed_letters: BTreeSet::new(),
            state: SessionState::AwaitingGuess,
        }
    }

    /// Apply one letter. Repeats, non-letters and guesses after the round
    /// ended are ignored.
    ///
    /// Input validation belongs to `GameController::guess`, which rejects
    /// non-letters with `InvalidGuess` before they get here; direct callers
    /// just get `Ignored`.
    pub fn guess_letter(&mut self, letter: char) -> GuessReport {
        if self.state.is_finished() || !letter.is_alphabetic() {
            return GuessReport::ignored();
        }

        let letter = canonical(letter);
        if !self.guessed_letters.insert(letter) {
            return GuessReport::ignored();
        }

        let positions: Vec<usize> = self
            .target
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == letter)
            .map(|(index, _)| index)
            .collect();

        let effect = if positions.is_empty() {
            self.miss_count += 1;
            if self.miss_count >= self.miss_limit {
                self.state = SessionState::Lost;
            }
            GuessEffect::Miss {
                miss_count: self.miss_count,
            }
        } else {
            for &index in &positions {
                self.revealed[index] = letter;
            }
            if !self.revealed.contains(&PLACEHOLDER) {
                self.state = SessionState::Won;
            }
            GuessEffect::Hit { positions }
        };

        let outcome = self.state.is_finished().then(|| OutcomeEvent {
            user_id: self.user_id,
            word_id: self.word.id,
            solved: self.state == SessionState::Won,
        });

        GuessReport { effect, outcome }
    }

    /// Like `guess_letter`, but a finished round is an error rather than a
    /// silent no-op.
    pub fn try_guess_letter(&mut self, letter: char) -> Result<GuessReport, HangmanError> {
        if self.state.is_finished() {
            return Err(HangmanError::SessionFinished);
        }
        Ok(self.guess_letter(letter))
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn word_id(&self) -> WordId {
        self.word.id
    }

    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }

    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    pub fn miss_limit(&self) -> u32 {
        self.miss_limit
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&canonical(letter))
    }

    /// Target in canonical (uppercase) form, for the loss message.
    pub fn solution(&self) -> String {
        self.target.iter().collect()
    }
}

/// Uppercase form used for comparison and display. Letters whose uppercase
/// expands to several characters are kept as-is.
fn canonical(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
