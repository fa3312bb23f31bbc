use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use hangman_core::{DEFAULT_MIN_WORD_LENGTH, DEFAULT_MISS_LIMIT, GameRules};
use hangman_persistence::connection::DEFAULT_DATABASE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rules: GameRules,
    pub words_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let miss_limit = match lookup("MISS_LIMIT") {
            Some(value) => value.parse().context("Invalid MISS_LIMIT")?,
            None => DEFAULT_MISS_LIMIT,
        };
        let min_word_length = match lookup("MIN_WORD_LENGTH") {
            Some(value) => value.parse().context("Invalid MIN_WORD_LENGTH")?,
            None => DEFAULT_MIN_WORD_LENGTH,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            rules: GameRules::new(miss_limit, min_word_length)?,
            words_file: lookup("WORDS_FILE").map(PathBuf::from),
        })
    }
}
