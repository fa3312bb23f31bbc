use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{UserId, WordId};

/// Placeholder shown for letters not yet revealed.
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SessionState {
    AwaitingGuess,
    Won,
    Lost,
}

impl SessionState {
    pub fn is_finished(self) -> bool {
        !matches!(self, SessionState::AwaitingGuess)
    }
}

/// One completed round, appended to history exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessRecord {
    pub user_id: UserId,
    pub word_id: WordId,
    pub solved: bool,
}

/// Masked word spaced out for display, e.g. `A P P _ _`.
pub fn display_word(revealed: &[char]) -> String {
    revealed
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
