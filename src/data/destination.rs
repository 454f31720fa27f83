//! Destination and subscription repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::destination::{Destination, UpsertDestinationParam};

pub struct DestinationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DestinationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces the destination of a guild.
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored destination row
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        param: UpsertDestinationParam,
    ) -> Result<entity::destination::Model, DbErr> {
        let guild_id = param.guild_id.to_string();
        let channel_id = param.channel_id.map(|id| id.to_string());

        match self.find_by_guild_id(param.guild_id).await? {
            Some(existing) => {
                let mut active: entity::destination::ActiveModel = existing.into();
                active.channel_id = ActiveValue::Set(channel_id);
                active.webhook_url = ActiveValue::Set(param.webhook_url);
                active.update(self.db).await
            }
            None => {
                entity::destination::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id),
                    channel_id: ActiveValue::Set(channel_id),
                    webhook_url: ActiveValue::Set(param.webhook_url),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    pub async fn find_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::destination::Model>, DbErr> {
        entity::prelude::Destination::find()
            .filter(entity::destination::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await
    }

    /// Deletes the destination of a guild and every subscription of that guild.
    ///
    /// # Returns
    /// - `Ok(true)`: Destination deleted
    /// - `Ok(false)`: Guild had no destination
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, guild_id: u64) -> Result<bool, DbErr> {
        let guild_id = guild_id.to_string();
        let txn = self.db.begin().await?;

        entity::prelude::GameSubscription::delete_many()
            .filter(entity::game_subscription::Column::GuildId.eq(guild_id.clone()))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Destination::delete_many()
            .filter(entity::destination::Column::GuildId.eq(guild_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Subscribes a guild to a game.
    ///
    /// # Returns
    /// - `Ok(true)`: Subscription created
    /// - `Ok(false)`: Guild was already subscribed
    /// - `Err(DbErr)`: Database error
    pub async fn subscribe(&self, guild_id: u64, game_id: i32) -> Result<bool, DbErr> {
        let guild_id = guild_id.to_string();

        let existing = entity::prelude::GameSubscription::find()
            .filter(entity::game_subscription::Column::GuildId.eq(guild_id.clone()))
            .filter(entity::game_subscription::Column::GameId.eq(game_id))
            .count(self.db)
            .await?;

        if existing > 0 {
            return Ok(false);
        }

        entity::game_subscription::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            game_id: ActiveValue::Set(game_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a guild's subscription to a game.
    ///
    /// # Returns
    /// - `Ok(true)`: Subscription removed
    /// - `Ok(false)`: Guild was not subscribed
    /// - `Err(DbErr)`: Database error
    pub async fn unsubscribe(&self, guild_id: u64, game_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::GameSubscription::delete_many()
            .filter(entity::game_subscription::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::game_subscription::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the destinations subscribed to a game.
    ///
    /// Rows that cannot be converted (bad snowflake, no target) are logged and skipped so
    /// one broken guild does not block delivery to the others.
    pub async fn get_subscribed_to_game(&self, game_id: i32) -> Result<Vec<Destination>, DbErr> {
        let guild_ids: Vec<String> = entity::prelude::GameSubscription::find()
            .filter(entity::game_subscription::Column::GameId.eq(game_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| s.guild_id)
            .collect();

        if guild_ids.is_empty() {
            return Ok(Vec::new());
        }

        let destinations = entity::prelude::Destination::find()
            .filter(entity::destination::Column::GuildId.is_in(guild_ids))
            .order_by_asc(entity::destination::Column::Id)
            .all(self.db)
            .await?;

        Ok(destinations
            .into_iter()
            .filter_map(|entity| match Destination::from_entity(entity) {
                Ok(destination) => Some(destination),
                Err(e) => {
                    tracing::error!("Skipping destination subscribed to game {}: {}", game_id, e);
                    None
                }
            })
            .collect())
    }
}
