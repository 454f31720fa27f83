//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game with a channel destination subscribed to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((game, destination))` - The created game and the subscribed destination
/// - `Err(DbErr)` - Database error during creation
pub async fn create_subscribed_game(
    db: &DatabaseConnection,
) -> Result<(entity::game::Model, entity::destination::Model), DbErr> {
    let game = crate::factory::game::create_game(db).await?;
    let destination = crate::factory::destination::create_destination(db).await?;
    crate::factory::game_subscription::create_subscription(db, &destination.guild_id, game.id)
        .await?;

    Ok((game, destination))
}
