use super::*;

/// Tests replacing the sources of a game.
///
/// Verifies that a source whose type and upstream ID survive the replace keeps its
/// marker, while a source with a changed upstream ID starts without one.
///
/// Expected: Ok(Some) with markers preserved only for unchanged sources
#[tokio::test]
async fn keeps_markers_of_unchanged_sources() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::game_source::GameSourceFactory::new(db, game.id, "internal-feed")
        .source_id("100")
        .last_update(Some("1700000000000"))
        .build()
        .await?;
    factory::game_source::GameSourceFactory::new(db, game.id, "external-feed")
        .source_id("100")
        .last_update(Some("1700000000000"))
        .position(1)
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .replace_sources(
            game.id,
            vec![
                source(SourceType::InternalFeed, "100"),
                source(SourceType::ExternalFeed, "200"),
                source(SourceType::SocialTimeline, "novadev"),
            ],
        )
        .await?
        .unwrap();

    assert_eq!(updated.sources.len(), 3);

    let internal = updated.source(SourceType::InternalFeed).unwrap();
    assert_eq!(internal.last_update.as_deref(), Some("1700000000000"));

    let external = updated.source(SourceType::ExternalFeed).unwrap();
    assert_eq!(external.source_id, "200");
    assert!(external.last_update.is_none());

    assert!(updated
        .source(SourceType::SocialTimeline)
        .unwrap()
        .last_update
        .is_none());

    Ok(())
}

/// Tests replacing sources with an empty list.
///
/// Expected: Ok(Some) with no sources left
#[tokio::test]
async fn removes_all_sources() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::create_game_source(db, game.id, "internal-feed").await?;

    let repo = GameRepository::new(db);
    let updated = repo.replace_sources(game.id, Vec::new()).await?.unwrap();

    assert!(updated.sources.is_empty());

    let remaining = entity::prelude::GameSource::find()
        .filter(entity::game_source::Column::GameId.eq(game.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests replacing sources of a missing game.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let result = repo
        .replace_sources(42, vec![source(SourceType::InternalFeed, "1")])
        .await?;

    assert!(result.is_none());

    Ok(())
}
