use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::{games, prelude::*};
use hangman_types::{GuessRecord, PlayerStats};

/// Append-only history of finished rounds.
pub struct GameRepository {
    db: DatabaseConnection,
}

impl GameRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record_result(&self, record: &GuessRecord) -> Result<()> {
        let game_model = games::ActiveModel {
            id: sea_orm::ActiveValue::Set(Uuid::new_v4()),
            user_id: sea_orm::ActiveValue::Set(record.user_id),
            word_id: sea_orm::ActiveValue::Set(record.word_id),
            solved: sea_orm::ActiveValue::Set(record.solved),
            played_at: sea_orm::ActiveValue::Set(chrono::Utc::now().into()),
        };

        Games::insert(game_model)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    pub async fn solved_word_texts(&self, user_id: Uuid) -> Result<HashSet<String>> {
        let solved = Games::find()
            .filter(games::Column::UserId.eq(user_id))
            .filter(games::Column::Solved.eq(true))
            .find_also_related(Words)
            .all(&self.db)
            .await?;

        Ok(solved
            .into_iter()
            .filter_map(|(_, word)| word.map(|w| w.text))
            .collect())
    }

    /// `(word text, solved)` for every round the player finished, oldest first.
    pub async fn history(&self, user_id: Uuid) -> Result<Vec<(String, bool)>> {
        let games = Games::find()
            .filter(games::Column::UserId.eq(user_id))
            .order_by_asc(games::Column::PlayedAt)
            .find_also_related(Words)
            .all(&self.db)
            .await?;

        Ok(games
            .into_iter()
            .filter_map(|(game, word)| word.map(|w| (w.text, game.solved)))
            .collect())
    }

    pub async fn player_stats(&self, user_id: Uuid) -> Result<PlayerStats> {
        let history = self.history(user_id).await?;
        Ok(summarize(&history))
    }
}

/// Ties on length or frequency go to the alphabetically first word.
fn summarize(history: &[(String, bool)]) -> PlayerStats {
    let games_won = history.iter().filter(|(_, solved)| *solved).count();

    let longest_solved_word = history
        .iter()
        .filter(|(_, solved)| *solved)
        .map(|(text, _)| text.as_str())
        .max_by_key(|text| (text.chars().count(), Reverse(*text)))
        .map(str::to_string);

    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for (text, _) in history {
        *frequency.entry(text.as_str()).or_default() += 1;
    }
    let most_frequent_word = frequency
        .into_iter()
        .max_by_key(|(text, count)| (*count, Reverse(*text)))
        .map(|(text, _)| text.to_string());

    PlayerStats {
        games_played: history.len() as u32,
        games_won: games_won as u32,
        longest_solved_word,
        most_frequent_word,
    }
}
