use super::*;

/// Tests reading a stored marker.
///
/// Expected: Ok(Some) with the marker of the requested source type only
#[tokio::test]
async fn gets_marker_of_source_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::game_source::GameSourceFactory::new(db, game.id, "internal-feed")
        .last_update(Some("1700000000000"))
        .build()
        .await?;
    factory::game_source::GameSourceFactory::new(db, game.id, "external-feed")
        .last_update(Some("1600000000000"))
        .position(1)
        .build()
        .await?;

    let repo = GameSourceRepository::new(db);

    assert_eq!(
        repo.get_marker(game.id, SourceType::InternalFeed).await?,
        Some("1700000000000".to_string())
    );
    assert_eq!(
        repo.get_marker(game.id, SourceType::ExternalFeed).await?,
        Some("1600000000000".to_string())
    );

    Ok(())
}

/// Tests reading the marker of a source that was never checked, and of a source type
/// the game does not have.
///
/// Expected: Ok(None) in both cases
#[tokio::test]
async fn returns_none_without_marker() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::create_game_source(db, game.id, "internal-feed").await?;

    let repo = GameSourceRepository::new(db);

    assert!(repo
        .get_marker(game.id, SourceType::InternalFeed)
        .await?
        .is_none());
    assert!(repo
        .get_marker(game.id, SourceType::SocialTimeline)
        .await?
        .is_none());

    Ok(())
}
