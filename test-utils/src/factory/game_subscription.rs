//! Subscription factory linking a destination guild to a game.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Subscribes the destination of `guild_id` to `game_id`.
///
/// # Returns
/// - `Ok(entity::game_subscription::Model)` - Created subscription row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_subscription(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    game_id: i32,
) -> Result<entity::game_subscription::Model, DbErr> {
    entity::game_subscription::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id.into()),
        game_id: ActiveValue::Set(game_id),
    }
    .insert(db)
    .await
}
