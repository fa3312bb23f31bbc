use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_users_table::Users;
use crate::m20240101_000002_create_words_table::Words;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Games::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Games::UserId).uuid().not_null())
                    .col(ColumnDef::new(Games::WordId).uuid().not_null())
                    .col(ColumnDef::new(Games::Solved).boolean().not_null())
                    .col(
                        ColumnDef::new(Games::PlayedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_user_id")
                            .from(Games::Table, Games::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_word_id")
                            .from(Games::Table, Games::WordId)
                            .to(Words::Table, Words::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Solved-history lookups filter on player first
        manager
            .create_index(
                Index::create()
                    .name("idx_games_user_id_solved")
                    .table(Games::Table)
                    .col(Games::UserId)
                    .col(Games::Solved)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    UserId,
    WordId,
    Solved,
    PlayedAt,
}
