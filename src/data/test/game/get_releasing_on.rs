use super::*;

/// Tests selecting games by release date.
///
/// Verifies that only games releasing on the exact date are returned, and that games
/// without a date are listed as missing one.
///
/// Expected: Ok with one game per query
#[tokio::test]
async fn selects_games_by_release_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let release = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    let releasing = factory::game::GameFactory::new(db)
        .release_date(Some(release))
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .release_date(NaiveDate::from_ymd_opt(2025, 3, 11))
        .build()
        .await?;
    let undated = factory::create_game(db).await?;

    let repo = GameRepository::new(db);

    let on_date = repo.get_releasing_on(release).await?;
    assert_eq!(on_date.len(), 1);
    assert_eq!(on_date[0].id, releasing.id);

    let missing = repo.get_missing_release_date().await?;
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].id, undated.id);

    Ok(())
}

/// Tests that a source row with an unknown type does not hide the game.
///
/// Expected: Ok with the game and only its known sources
#[tokio::test]
async fn skips_sources_with_unknown_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::create_game_source(db, game.id, "internal-feed").await?;
    factory::game_source::GameSourceFactory::new(db, game.id, "carrier-pigeon")
        .position(1)
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let games = repo.get_all().await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].sources.len(), 1);
    assert_eq!(games[0].sources[0].source_type, SourceType::InternalFeed);

    Ok(())
}
