use std::collections::HashSet;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};
use tracing::warn;

use crate::connection::connect_and_migrate;
use crate::repositories::{CredentialCheck, GameRepository, UserRepository, WordRepository};
use hangman_core::{AccountStore, RecordStore};
use hangman_types::{GuessRecord, HangmanError, UserId, Word};

/// SQLite-backed record and account store.
///
/// Open it once at startup and `close` it at shutdown; clones share the
/// same connection pool.
#[derive(Clone)]
pub struct SqliteStore {
    connection: DatabaseConnection,
}

impl SqliteStore {
    pub fn new(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    pub async fn open(database_url: &str) -> Result<Self, DbErr> {
        let connection = connect_and_migrate(database_url).await?;
        Ok(Self { connection })
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.connection.clone())
    }

    pub fn words(&self) -> WordRepository {
        WordRepository::new(self.connection.clone())
    }

    pub fn games(&self) -> GameRepository {
        GameRepository::new(self.connection.clone())
    }
}

fn unavailable(error: anyhow::Error) -> HangmanError {
    warn!("Store call failed: {:#}", error);
    HangmanError::store_unavailable(error.to_string())
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn fetch_candidate_words(&self) -> Result<Vec<Word>, HangmanError> {
        self.words().all_words().await.map_err(unavailable)
    }

    async fn fetch_solved_word_texts(
        &self,
        user_id: Option<UserId>,
    ) -> Result<HashSet<String>, HangmanError> {
        let Some(user_id) = user_id else {
            return Ok(HashSet::new());
        };
        self.games()
            .solved_word_texts(user_id)
            .await
            .map_err(unavailable)
    }

    async fn append_outcome(&self, record: GuessRecord) -> Result<(), HangmanError> {
        self.games()
            .record_result(&record)
            .await
            .map_err(unavailable)
    }
}

#[async_trait]
impl AccountStore for SqliteStore {
    async fn verify_credentials(&self, name: &str, secret: &str) -> Result<UserId, HangmanError> {
        let check = self
            .users()
            .check_credentials(name, secret)
            .await
            .map_err(unavailable)?;

        match check {
            CredentialCheck::Valid(player) => Ok(player.id),
            CredentialCheck::UnknownUser => Err(HangmanError::NotFound),
            CredentialCheck::WrongSecret => Err(HangmanError::CredentialMismatch),
        }
    }

    async fn register(&self, name: &str, secret: &str) -> Result<UserId, HangmanError> {
        self.users()
            .create_user(name, secret)
            .await
            .map_err(unavailable)?
            .map(|player| player.id)
            .ok_or(HangmanError::NameTaken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use hangman_core::{GameController, GameRules, NullRenderer, login, register};
    use hangman_types::SessionState;
    use migration::{Migrator, MigratorTrait};

    async fn setup_store() -> SqliteStore {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SqliteStore::new(db)
    }

    #[tokio::test]
    async fn test_account_errors_map_to_taxonomy() {
        let store = setup_store().await;
        let player = register(&store, "alice", "secret").await.unwrap();

        assert_eq!(
            store.verify_credentials("alice", "secret").await,
            Ok(player.id)
        );
        assert_eq!(
            store.verify_credentials("alice", "nope").await,
            Err(HangmanError::CredentialMismatch)
        );
        assert_eq!(
            store.verify_credentials("bob", "secret").await,
            Err(HangmanError::NotFound)
        );
        assert_eq!(
            store.register("alice", "again").await,
            Err(HangmanError::NameTaken)
        );
    }

    #[tokio::test]
    async fn test_solved_history_for_guest_is_empty() {
        let store = setup_store().await;
        assert!(store.fetch_solved_word_texts(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_full_round_is_recorded() {
        let store = setup_store().await;
        store.words().seed_words(["tree", "cat"]).await.unwrap();
        register(&store, "alice", "secret").await.unwrap();
        let player = login(&store, "alice", "secret").await.unwrap();

        let mut controller = GameController::new(store.clone(), NullRenderer, GameRules::default());
        controller.new_session(Some(player.id)).await.unwrap();
        for letter in ['t', 'r', 'e'] {
            controller.guess(letter).await.unwrap();
        }
        assert_eq!(controller.session().unwrap().state(), SessionState::Won);

        let solved = store.fetch_solved_word_texts(Some(player.id)).await.unwrap();
        assert!(solved.contains("tree"));

        // "cat" is too short, so nothing is left
        let result = controller.new_word().await;
        assert!(matches!(result, Err(HangmanError::NoEligibleWords)));

        let stats = store.games().player_stats(player.id).await.unwrap();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
    }

    #[tokio::test]
    async fn test_closed_store_reports_unavailable() {
        let store = setup_store().await;
        let handle = store.clone();
        store.close().await.unwrap();

        let result = handle.fetch_candidate_words().await;
        assert!(matches!(result, Err(HangmanError::StoreUnavailable { .. })));
    }
}
