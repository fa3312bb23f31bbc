use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::credentials::HashedCredential;
use crate::entities::{prelude::*, users};
use hangman_types::Player;

pub struct UserRepository {
    db: DatabaseConnection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialCheck {
    Valid(Player),
    UnknownUser,
    WrongSecret,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_player(model: users::Model) -> Player {
        Player {
            id: model.id,
            display_name: model.display_name,
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Player>> {
        let user_model = Users::find_by_id(id).one(&self.db).await?;
        Ok(user_model.map(Self::model_to_player))
    }

    pub async fn find_by_display_name(&self, display_name: &str) -> Result<Option<Player>> {
        let user_model = self.find_model_by_display_name(display_name).await?;
        Ok(user_model.map(Self::model_to_player))
    }

    async fn find_model_by_display_name(&self, display_name: &str) -> Result<Option<users::Model>> {
        let user_model = Users::find()
            .filter(users::Column::DisplayName.eq(display_name))
            .one(&self.db)
            .await?;
        Ok(user_model)
    }

    /// Returns `None` if the display name is already taken.
    pub async fn create_user(&self, display_name: &str, secret: &str) -> Result<Option<Player>> {
        if self.find_model_by_display_name(display_name).await?.is_some() {
            return Ok(None);
        }

        let id = Uuid::new_v4();
        let credential = HashedCredential::new(secret);
        let user_model = users::ActiveModel {
            id: sea_orm::ActiveValue::Set(id),
            display_name: sea_orm::ActiveValue::Set(display_name.to_string()),
            credential_hash: sea_orm::ActiveValue::Set(credential.hash),
            credential_salt: sea_orm::ActiveValue::Set(credential.salt),
            created_at: sea_orm::ActiveValue::Set(chrono::Utc::now().into()),
        };

        Users::insert(user_model).exec_without_returning(&self.db).await?;

        // Fetch the created user
        let created_user = Users::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Failed to retrieve created user"))?;

        Ok(Some(Self::model_to_player(created_user)))
    }

    pub async fn check_credentials(&self, display_name: &str, secret: &str) -> Result<CredentialCheck> {
        let Some(model) = self.find_model_by_display_name(display_name).await? else {
            return Ok(CredentialCheck::UnknownUser);
        };

        if !HashedCredential::verify(&model.credential_hash, &model.credential_salt, secret) {
            return Ok(CredentialCheck::WrongSecret);
        }

        Ok(CredentialCheck::Valid(Self::model_to_player(model)))
    }

    pub async fn all_display_names(&self) -> Result<Vec<String>> {
        let users = Users::find()
            .order_by_asc(users::Column::DisplayName)
            .all(&self.db)
            .await?;

        Ok(users.into_iter().map(|model| model.display_name).collect())
    }
}
