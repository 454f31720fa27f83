use super::*;

/// Tests deleting a guild's destination.
///
/// Verifies that the guild's subscriptions are removed with it.
///
/// Expected: Ok(true) with no subscriptions left
#[tokio::test]
async fn deletes_destination_and_subscriptions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, destination) = factory::helpers::create_subscribed_game(db).await?;
    let guild_id: u64 = destination.guild_id.parse().unwrap();

    let repo = DestinationRepository::new(db);

    assert!(repo.delete(guild_id).await?);
    assert!(repo.find_by_guild_id(guild_id).await?.is_none());
    assert!(repo.get_subscribed_to_game(game.id).await?.is_empty());
    assert_eq!(entity::prelude::GameSubscription::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a guild without a destination.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DestinationRepository::new(db);

    assert!(!repo.delete(1).await?);

    Ok(())
}
