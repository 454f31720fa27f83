use sea_orm::DatabaseConnection;
use url::Url;

use crate::{
    data::{destination::DestinationRepository, game::GameRepository},
    error::AppError,
    model::destination::{Destination, UpsertDestinationParam},
};

pub struct DestinationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DestinationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces where a guild receives notifications.
    ///
    /// # Returns
    /// - `Ok(Destination)`: The stored destination
    /// - `Err(AppError::BadRequest)`: Zero guild or channel id, no target given, or the
    ///   webhook URL is not https
    /// - `Err(AppError)`: Database error or corrupt stored row
    pub async fn upsert(&self, param: UpsertDestinationParam) -> Result<Destination, AppError> {
        if param.guild_id == 0 || param.channel_id == Some(0) {
            return Err(AppError::BadRequest(
                "Guild and channel IDs must be non-zero Discord snowflakes".to_string(),
            ));
        }

        if param.channel_id.is_none() && param.webhook_url.is_none() {
            return Err(AppError::BadRequest(
                "A destination needs a channel or a webhook URL".to_string(),
            ));
        }

        if let Some(webhook_url) = &param.webhook_url {
            validate_webhook_url(webhook_url)?;
        }

        let model = DestinationRepository::new(self.db).upsert(param).await?;

        Ok(Destination::from_entity(model)?)
    }

    /// Subscribes a guild to a game.
    ///
    /// # Returns
    /// - `Ok(true)`: Subscription created
    /// - `Ok(false)`: Guild was already subscribed
    /// - `Err(AppError::NotFound)`: Guild has no destination, or the game does not exist
    pub async fn subscribe(&self, guild_id: u64, game_id: i32) -> Result<bool, AppError> {
        let repo = DestinationRepository::new(self.db);

        if repo.find_by_guild_id(guild_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Guild {} has no notification destination",
                guild_id
            )));
        }

        if GameRepository::new(self.db).get_by_id(game_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Game {} not found", game_id)));
        }

        Ok(repo.subscribe(guild_id, game_id).await?)
    }

    /// Unsubscribes a guild from a game.
    ///
    /// # Returns
    /// - `Ok(true)`: Subscription removed
    /// - `Ok(false)`: Guild was not subscribed
    pub async fn unsubscribe(&self, guild_id: u64, game_id: i32) -> Result<bool, AppError> {
        Ok(DestinationRepository::new(self.db)
            .unsubscribe(guild_id, game_id)
            .await?)
    }

    /// Removes a guild's destination and subscriptions.
    pub async fn remove(&self, guild_id: u64) -> Result<(), AppError> {
        if !DestinationRepository::new(self.db).delete(guild_id).await? {
            return Err(AppError::NotFound(format!(
                "Guild {} has no notification destination",
                guild_id
            )));
        }

        Ok(())
    }
}

fn validate_webhook_url(value: &str) -> Result<(), AppError> {
    let url = Url::parse(value)
        .map_err(|e| AppError::BadRequest(format!("Invalid webhook URL '{}': {}", value, e)))?;

    if url.scheme() != "https" {
        return Err(AppError::BadRequest(format!(
            "Webhook URL must use https, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}
