use std::collections::HashSet;

use async_trait::async_trait;
use hangman_types::{GuessRecord, HangmanError, UserId, Word};

/// Source of candidate words and sink for finished rounds.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch_candidate_words(&self) -> Result<Vec<Word>, HangmanError>;

    /// Texts of every word the player has solved. Empty for `None`.
    async fn fetch_solved_word_texts(
        &self,
        user_id: Option<UserId>,
    ) -> Result<HashSet<String>, HangmanError>;

    async fn append_outcome(&self, record: GuessRecord) -> Result<(), HangmanError>;
}

/// Registration and credential checks.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// `NotFound` for an unknown name, `CredentialMismatch` for a wrong secret.
    async fn verify_credentials(&self, name: &str, secret: &str) -> Result<UserId, HangmanError>;

    /// `NameTaken` when the display name already exists.
    async fn register(&self, name: &str, secret: &str) -> Result<UserId, HangmanError>;
}
