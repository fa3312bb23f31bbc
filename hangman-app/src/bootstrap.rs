use anyhow::{Context, Result};
use hangman_core::{BUILTIN_WORDS, parse_word_list};
use hangman_persistence::SqliteStore;
use tracing::info;

use crate::config::Config;

/// Open the store and make sure there is something to play.
pub async fn open_store(config: &Config) -> Result<SqliteStore> {
    let store = SqliteStore::open(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    seed_words(&store, config).await?;
    Ok(store)
}

/// Loads `WORDS_FILE` if set, otherwise the built-in list when the store
/// is empty.
pub async fn seed_words(store: &SqliteStore, config: &Config) -> Result<usize> {
    let words = store.words();

    let added = match &config.words_file {
        Some(path) => {
            info!("Loading words from {}", path.display());
            let contents = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read word list {}", path.display()))?;
            words.seed_words(parse_word_list(&contents)).await?
        }
        None if words.count().await? == 0 => {
            info!("Word table empty, seeding built-in list");
            words.seed_words(parse_word_list(BUILTIN_WORDS)).await?
        }
        None => 0,
    };

    Ok(added)
}
