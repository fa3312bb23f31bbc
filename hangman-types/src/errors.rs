use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Every recoverable failure the game can surface to a player.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HangmanError {
    #[error("Username not registered")]
    NotFound,
    #[error("Incorrect password")]
    CredentialMismatch,
    #[error("User name taken")]
    NameTaken,
    #[error("User name must not be blank")]
    InvalidName,
    #[error("No new words available")]
    NoEligibleWords,
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },
    #[error("Session already finished")]
    SessionFinished,
    #[error("Not a letter: {input:?}")]
    InvalidGuess { input: String },
}

impl HangmanError {
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        HangmanError::StoreUnavailable {
            message: message.into(),
        }
    }

    /// Errors the player can fix themselves; everything else warrants a
    /// generic failure notice.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, HangmanError::StoreUnavailable { .. })
    }
}
