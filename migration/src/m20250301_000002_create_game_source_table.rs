use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameSource::Table)
                    .if_not_exists()
                    .col(pk_auto(GameSource::Id))
                    .col(integer(GameSource::GameId))
                    .col(string(GameSource::SourceType))
                    .col(string(GameSource::SourceId))
                    .col(string_null(GameSource::LastUpdate))
                    .col(integer(GameSource::Position).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_source_game_id")
                            .from(GameSource::Table, GameSource::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One marker row per source type per game
        manager
            .create_index(
                Index::create()
                    .name("idx_game_source_unique")
                    .table(GameSource::Table)
                    .col(GameSource::GameId)
                    .col(GameSource::SourceType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_game_source_unique")
                    .table(GameSource::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GameSource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameSource {
    Table,
    Id,
    GameId,
    SourceType,
    SourceId,
    LastUpdate,
    Position,
}
