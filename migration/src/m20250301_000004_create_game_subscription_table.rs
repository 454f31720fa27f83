use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_game_table::Game,
    m20250301_000003_create_destination_table::Destination,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameSubscription::Table)
                    .if_not_exists()
                    .col(pk_auto(GameSubscription::Id))
                    .col(string(GameSubscription::GuildId))
                    .col(integer(GameSubscription::GameId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_subscription_guild_id")
                            .from(GameSubscription::Table, GameSubscription::GuildId)
                            .to(Destination::Table, Destination::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_subscription_game_id")
                            .from(GameSubscription::Table, GameSubscription::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_subscription_unique")
                    .table(GameSubscription::Table)
                    .col(GameSubscription::GuildId)
                    .col(GameSubscription::GameId)
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
                    .name("idx_game_subscription_unique")
                    .table(GameSubscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GameSubscription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameSubscription {
    Table,
    Id,
    GuildId,
    GameId,
}
