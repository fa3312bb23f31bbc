use hangman_types::{GuessRecord, HangmanError, SessionState, UserId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::{
    GameRules, GameSession, GuessEffect, GuessReport, OutcomeEvent, RecordStore, Renderer,
    WordSelector,
};

/// Owns the single active round and wires it to the record store and the
/// rendering surface.
pub struct GameController<S, Ren> {
    store: S,
    renderer: Ren,
    selector: WordSelector,
    rules: GameRules,
    user_id: Option<UserId>,
    session: Option<GameSession>,
    rng: StdRng,
}

impl<S: RecordStore, Ren: Renderer> GameController<S, Ren> {
    pub fn new(store: S, renderer: Ren, rules: GameRules) -> Self {
        Self::with_rng(store, renderer, rules, StdRng::from_os_rng())
    }

    pub fn with_rng(store: S, renderer: Ren, rules: GameRules, rng: StdRng) -> Self {
        Self {
            store,
            renderer,
            selector: WordSelector::new(&rules),
            rules,
            user_id: None,
            session: None,
            rng,
        }
    }

    /// Switch to `user_id` (after login or registration) and deal a word.
    /// If no word can be chosen both the player and the round stay as they
    /// were.
    pub async fn new_session(
        &mut self,
        user_id: Option<UserId>,
    ) -> Result<&GameSession, HangmanError> {
        self.deal(user_id).await
    }

    /// Replace the current round with a fresh one. On failure the current
    /// round is left untouched.
    pub async fn new_word(&mut self) -> Result<&GameSession, HangmanError> {
        self.deal(self.user_id).await
    }

    async fn deal(&mut self, user_id: Option<UserId>) -> Result<&GameSession, HangmanError> {
        let word = self
            .selector
            .choose_word(&self.store, user_id, &mut self.rng)
            .await?;

        info!(
            "New round for player {:?}: {} letters",
            user_id,
            word.char_len()
        );
        let session = GameSession::new(user_id, word, &self.rules);

        self.renderer.on_progress_changed(session.revealed());
        self.renderer.on_miss_changed(session.miss_count());

        self.user_id = user_id;
        Ok(self.session.insert(session))
    }

    /// Apply a letter to the current round.
    ///
    /// A guess that ends the round is only committed once its outcome has
    /// been stored; if storing fails the round is unchanged and the same
    /// letter can be tried again.
    pub async fn guess(&mut self, letter: char) -> Result<GuessEffect, HangmanError> {
        if !letter.is_alphabetic() {
            return Err(HangmanError::InvalidGuess {
                input: letter.to_string(),
            });
        }

        let Some(current) = self.session.as_ref() else {
            debug!("Guess {:?} with no active round", letter);
            return Ok(GuessEffect::Ignored);
        };

        let mut next = current.clone();
        let report = next.guess_letter(letter);

        if let Some(outcome) = &report.outcome {
            self.record(outcome).await?;
        }

        self.session = Some(next);
        self.render(&report);

        Ok(report.effect)
    }

    async fn record(&self, outcome: &OutcomeEvent) -> Result<(), HangmanError> {
        let Some(user_id) = outcome.user_id else {
            debug!("Round finished without a player, not recorded");
            return Ok(());
        };

        self.store
            .append_outcome(GuessRecord {
                user_id,
                word_id: outcome.word_id,
                solved: outcome.solved,
            })
            .await?;

        info!(
            "Recorded {} for player {}",
            if outcome.solved { "win" } else { "loss" },
            user_id
        );
        Ok(())
    }

    fn render(&mut self, report: &GuessReport) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        match &report.effect {
            GuessEffect::Ignored => return,
            GuessEffect::Hit { .. } => self.renderer.on_progress_changed(session.revealed()),
            GuessEffect::Miss { miss_count } => self.renderer.on_miss_changed(*miss_count),
        }

        match session.state() {
            SessionState::AwaitingGuess => {}
            SessionState::Won => self.renderer.on_outcome(SessionState::Won, None),
            SessionState::Lost => {
                let solution = session.solution();
                self.renderer.on_outcome(SessionState::Lost, Some(&solution));
            }
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn renderer(&self) -> &Ren {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Ren {
        &mut self.renderer
    }
}
