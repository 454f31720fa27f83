use super::*;

/// Tests resolving the destinations of a game.
///
/// Verifies that channel and webhook destinations are both returned, and that guilds not
/// subscribed to the game are left out.
///
/// Expected: Ok with two destinations
#[tokio::test]
async fn gets_subscribed_destinations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let channel = factory::destination::DestinationFactory::new(db)
        .channel_id(Some("555".to_string()))
        .build()
        .await?;
    let webhook = factory::destination::DestinationFactory::new(db)
        .channel_id(None)
        .webhook_url(Some("https://discord.com/api/webhooks/1/token".to_string()))
        .build()
        .await?;
    factory::create_destination(db).await?;

    factory::create_subscription(db, &channel.guild_id, game.id).await?;
    factory::create_subscription(db, &webhook.guild_id, game.id).await?;

    let repo = DestinationRepository::new(db);
    let destinations = repo.get_subscribed_to_game(game.id).await?;

    assert_eq!(destinations.len(), 2);
    assert!(destinations
        .iter()
        .any(|d| d.target == DestinationTarget::Channel(555)));
    assert!(destinations.iter().any(|d| d.target
        == DestinationTarget::Webhook("https://discord.com/api/webhooks/1/token".to_string())));

    Ok(())
}

/// Tests that destinations with a corrupt or zero channel ID are skipped.
///
/// Expected: Ok with only the valid destination
#[tokio::test]
async fn skips_corrupt_destinations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let valid = factory::create_destination(db).await?;
    let corrupt = factory::destination::DestinationFactory::new(db)
        .channel_id(Some("not-a-snowflake".to_string()))
        .build()
        .await?;
    let zero_channel = factory::destination::DestinationFactory::new(db)
        .channel_id(Some("0".to_string()))
        .build()
        .await?;

    factory::create_subscription(db, &valid.guild_id, game.id).await?;
    factory::create_subscription(db, &corrupt.guild_id, game.id).await?;
    factory::create_subscription(db, &zero_channel.guild_id, game.id).await?;

    let repo = DestinationRepository::new(db);
    let destinations = repo.get_subscribed_to_game(game.id).await?;

    assert_eq!(destinations.len(), 1);
    assert_eq!(destinations[0].id, valid.id);

    Ok(())
}
