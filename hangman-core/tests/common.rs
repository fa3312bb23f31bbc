#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hangman_core::{AccountStore, GameController, GameRules, RecordStore, Renderer};
use hangman_types::{GuessRecord, HangmanError, SessionState, UserId, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

/// In-memory record and account store. Clones share state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    words: Arc<Mutex<Vec<Word>>>,
    history: Arc<Mutex<Vec<GuessRecord>>>,
    accounts: Arc<Mutex<HashMap<String, (UserId, String)>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn with_words(texts: &[&str]) -> Self {
        let store = Self::default();
        store
            .words
            .lock()
            .unwrap()
            .extend(texts.iter().map(|t| Word::new(Uuid::new_v4(), *t)));
        store
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn history(&self) -> Vec<GuessRecord> {
        self.history.lock().unwrap().clone()
    }

    pub fn word_text(&self, word_id: Uuid) -> Option<String> {
        self.words
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == word_id)
            .map(|w| w.text.clone())
    }

    fn check(&self) -> Result<(), HangmanError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(HangmanError::store_unavailable("test store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_candidate_words(&self) -> Result<Vec<Word>, HangmanError> {
        self.check()?;
        Ok(self.words.lock().unwrap().clone())
    }

    async fn fetch_solved_word_texts(
        &self,
        user_id: Option<UserId>,
    ) -> Result<HashSet<String>, HangmanError> {
        self.check()?;
        let Some(user_id) = user_id else {
            return Ok(HashSet::new());
        };
        let solved: Vec<Uuid> = self
            .history
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id && r.solved)
            .map(|r| r.word_id)
            .collect();
        Ok(solved.into_iter().filter_map(|id| self.word_text(id)).collect())
    }

    async fn append_outcome(&self, record: GuessRecord) -> Result<(), HangmanError> {
        self.check()?;
        self.history.lock().unwrap().push(record);
        Ok(())
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn verify_credentials(&self, name: &str, secret: &str) -> Result<UserId, HangmanError> {
        self.check()?;
        let accounts = self.accounts.lock().unwrap();
        let (id, stored) = accounts.get(name).ok_or(HangmanError::NotFound)?;
        if stored != secret {
            return Err(HangmanError::CredentialMismatch);
        }
        Ok(*id)
    }

    async fn register(&self, name: &str, secret: &str) -> Result<UserId, HangmanError> {
        self.check()?;
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(name) {
            return Err(HangmanError::NameTaken);
        }
        let id = Uuid::new_v4();
        accounts.insert(name.to_string(), (id, secret.to_string()));
        Ok(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Progress(String),
    Misses(u32),
    Outcome(SessionState, Option<String>),
}

/// Collects render callbacks for assertions
#[derive(Clone, Default)]
pub struct RenderCollector {
    events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl RenderCollector {
    pub fn get_events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn last_event(&self) -> Option<RenderEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn outcomes(&self) -> Vec<RenderEvent> {
        self.get_events()
            .into_iter()
            .filter(|e| matches!(e, RenderEvent::Outcome(..)))
            .collect()
    }
}

impl Renderer for RenderCollector {
    fn on_progress_changed(&mut self, revealed: &[char]) {
        let progress = revealed.iter().collect();
        self.events.lock().unwrap().push(RenderEvent::Progress(progress));
    }

    fn on_miss_changed(&mut self, miss_count: u32) {
        self.events.lock().unwrap().push(RenderEvent::Misses(miss_count));
    }

    fn on_outcome(&mut self, state: SessionState, revealed_word: Option<&str>) {
        self.events
            .lock()
            .unwrap()
            .push(RenderEvent::Outcome(state, revealed_word.map(str::to_string)));
    }
}

pub fn create_controller(
    store: &MemoryStore,
    renderer: &RenderCollector,
) -> GameController<MemoryStore, RenderCollector> {
    GameController::with_rng(
        store.clone(),
        renderer.clone(),
        GameRules::default(),
        StdRng::seed_from_u64(11),
    )
}

/// Letters absent from every test word
pub const MISSES: [char; 11] = ['b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'm', 'q', 'z'];
