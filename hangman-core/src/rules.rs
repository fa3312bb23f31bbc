use serde::{Deserialize, Serialize};

pub const DEFAULT_MISS_LIMIT: u32 = 11;
/// Words must be strictly longer than three characters.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Tunable game constants shared by the selector and the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    pub miss_limit: u32,
    pub min_word_length: usize,
}

impl GameRules {
    pub fn new(miss_limit: u32, min_word_length: usize) -> anyhow::Result<Self> {
        if miss_limit == 0 {
            anyhow::bail!("miss limit must be at least 1");
        }
        if min_word_length == 0 {
            anyhow::bail!("minimum word length must be at least 1");
        }
        Ok(Self {
            miss_limit,
            min_word_length,
        })
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            miss_limit: DEFAULT_MISS_LIMIT,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }
}
