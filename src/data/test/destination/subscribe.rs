use super::*;

/// Tests subscribing a guild to a game twice.
///
/// Expected: Ok(true) then Ok(false), a single subscription row
#[tokio::test]
async fn subscribes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let destination = factory::create_destination(db).await?;
    let guild_id: u64 = destination.guild_id.parse().unwrap();

    let repo = DestinationRepository::new(db);

    assert!(repo.subscribe(guild_id, game.id).await?);
    assert!(!repo.subscribe(guild_id, game.id).await?);
    assert_eq!(entity::prelude::GameSubscription::find().count(db).await?, 1);

    Ok(())
}

/// Tests unsubscribing.
///
/// Expected: Ok(true) for an existing subscription, Ok(false) afterwards
#[tokio::test]
async fn unsubscribes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, destination) = factory::helpers::create_subscribed_game(db).await?;
    let guild_id: u64 = destination.guild_id.parse().unwrap();

    let repo = DestinationRepository::new(db);

    assert!(repo.unsubscribe(guild_id, game.id).await?);
    assert!(!repo.unsubscribe(guild_id, game.id).await?);

    Ok(())
}
