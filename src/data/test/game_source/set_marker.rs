use super::*;

/// Tests storing a marker.
///
/// Verifies that only the row of the given game and source type is updated.
///
/// Expected: Ok(true) with the other game's marker untouched
#[tokio::test]
async fn stores_marker_for_single_source() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;
    factory::create_game_source(db, game.id, "internal-feed").await?;
    factory::game_source::GameSourceFactory::new(db, other.id, "internal-feed")
        .last_update(Some("1500000000000"))
        .build()
        .await?;

    let repo = GameSourceRepository::new(db);
    let stored = repo
        .set_marker(game.id, SourceType::InternalFeed, "1700000000000")
        .await?;

    assert!(stored);
    assert_eq!(
        repo.get_marker(game.id, SourceType::InternalFeed).await?,
        Some("1700000000000".to_string())
    );
    assert_eq!(
        repo.get_marker(other.id, SourceType::InternalFeed).await?,
        Some("1500000000000".to_string())
    );

    Ok(())
}

/// Tests storing a marker for a source the game no longer has.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_source_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = GameSourceRepository::new(db);
    let stored = repo
        .set_marker(game.id, SourceType::ExternalFeed, "1700000000000")
        .await?;

    assert!(!stored);

    Ok(())
}
