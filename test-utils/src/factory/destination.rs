//! Destination factory for creating test delivery targets.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test destinations with customizable fields.
///
/// Defaults to a channel destination; use `webhook_url` for webhook delivery.
pub struct DestinationFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: Option<String>,
    webhook_url: Option<String>,
}

impl<'a> DestinationFactory<'a> {
    /// Creates a new DestinationFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric string
    /// - channel_id: auto-incremented numeric string
    /// - webhook_url: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            channel_id: Some(next_id().to_string()),
            webhook_url: None,
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the channel ID.
    pub fn channel_id(mut self, channel_id: Option<String>) -> Self {
        self.channel_id = channel_id;
        self
    }

    /// Sets the webhook URL.
    pub fn webhook_url(mut self, webhook_url: Option<String>) -> Self {
        self.webhook_url = webhook_url;
        self
    }

    /// Builds and inserts the destination entity into the database.
    pub async fn build(self) -> Result<entity::destination::Model, DbErr> {
        entity::destination::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            webhook_url: ActiveValue::Set(self.webhook_url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel destination with default values.
pub async fn create_destination(
    db: &DatabaseConnection,
) -> Result<entity::destination::Model, DbErr> {
    DestinationFactory::new(db).build().await
}
