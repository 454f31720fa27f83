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
                    .table(ReleaseAnnouncement::Table)
                    .if_not_exists()
                    .col(pk_auto(ReleaseAnnouncement::Id))
                    .col(integer(ReleaseAnnouncement::GameId))
                    .col(string(ReleaseAnnouncement::Milestone))
                    .col(date(ReleaseAnnouncement::ReleaseDate))
                    .col(
                        timestamp(ReleaseAnnouncement::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_release_announcement_game_id")
                            .from(ReleaseAnnouncement::Table, ReleaseAnnouncement::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A milestone for a given release date is claimed at most once
        manager
            .create_index(
                Index::create()
                    .name("idx_release_announcement_unique")
                    .table(ReleaseAnnouncement::Table)
                    .col(ReleaseAnnouncement::GameId)
                    .col(ReleaseAnnouncement::Milestone)
                    .col(ReleaseAnnouncement::ReleaseDate)
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
                    .name("idx_release_announcement_unique")
                    .table(ReleaseAnnouncement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ReleaseAnnouncement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReleaseAnnouncement {
    Table,
    Id,
    GameId,
    Milestone,
    ReleaseDate,
    CreatedAt,
}
