use super::*;

/// Tests creating a destination for a new guild.
///
/// Expected: Ok with the stored row
#[tokio::test]
async fn creates_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DestinationRepository::new(db);
    let destination = repo
        .upsert(UpsertDestinationParam {
            guild_id: 123456789,
            channel_id: Some(987654321),
            webhook_url: None,
        })
        .await?;

    assert_eq!(destination.guild_id, "123456789");
    assert_eq!(destination.channel_id.as_deref(), Some("987654321"));
    assert!(destination.webhook_url.is_none());

    Ok(())
}

/// Tests replacing the destination of a guild.
///
/// Verifies that a second upsert updates the existing row instead of adding one.
///
/// Expected: Ok with a single row holding the webhook
#[tokio::test]
async fn replaces_existing_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DestinationRepository::new(db);
    let first = repo
        .upsert(UpsertDestinationParam {
            guild_id: 42,
            channel_id: Some(7),
            webhook_url: None,
        })
        .await?;
    let second = repo
        .upsert(UpsertDestinationParam {
            guild_id: 42,
            channel_id: None,
            webhook_url: Some("https://discord.com/api/webhooks/1/token".to_string()),
        })
        .await?;

    assert_eq!(first.id, second.id);
    assert!(second.channel_id.is_none());
    assert_eq!(entity::prelude::Destination::find().count(db).await?, 1);

    Ok(())
}
