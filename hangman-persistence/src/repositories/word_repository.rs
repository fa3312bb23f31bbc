use std::collections::HashSet;

use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::entities::{prelude::*, words};
use hangman_core::is_alphabetic;
use hangman_types::Word;

pub struct WordRepository {
    db: DatabaseConnection,
}

impl WordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_word(model: words::Model) -> Word {
        Word {
            id: model.id,
            text: model.text,
        }
    }

    pub async fn all_words(&self) -> Result<Vec<Word>> {
        let words = Words::find().all(&self.db).await?;
        Ok(words.into_iter().map(Self::model_to_word).collect())
    }

    pub async fn find_by_text(&self, text: &str) -> Result<Option<Word>> {
        let word = Words::find()
            .filter(words::Column::Text.eq(text))
            .one(&self.db)
            .await?;
        Ok(word.map(Self::model_to_word))
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Words::find().count(&self.db).await?)
    }

    /// Insert every text not already stored. Texts with anything other than
    /// letters are skipped. Returns how many were added.
    pub async fn seed_words<I, T>(&self, texts: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let existing: HashSet<String> = Words::find()
            .select_only()
            .column(words::Column::Text)
            .into_tuple::<String>()
            .all(&self.db)
            .await?
            .into_iter()
            .collect();

        let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();
        let mut seen = HashSet::new();
        let new_words: Vec<words::ActiveModel> = texts
            .into_iter()
            .map(Into::into)
            .filter(|text| {
                let playable = is_alphabetic(text);
                if !playable {
                    warn!("Skipping unplayable word {:?}", text);
                }
                playable
            })
            .filter(|text| !existing.contains(text) && seen.insert(text.clone()))
            .map(|text| words::ActiveModel {
                id: sea_orm::ActiveValue::Set(Uuid::new_v4()),
                text: sea_orm::ActiveValue::Set(text),
                created_at: sea_orm::ActiveValue::Set(now),
            })
            .collect();

        let added = new_words.len();
        if added == 0 {
            return Ok(0);
        }

        Words::insert_many(new_words)
            .exec_without_returning(&self.db)
            .await?;

        info!("Seeded {} new words", added);
        Ok(added)
    }
}
