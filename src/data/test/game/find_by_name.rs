use super::*;

/// Tests finding a game by a differently formatted name.
///
/// Expected: Ok(Some) with the stored game
#[tokio::test]
async fn finds_game_ignoring_case_and_whitespace() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::GameFactory::new(db)
        .name("Nova Drift")
        .build()
        .await?;
    factory::create_game_source(db, game.id, "internal-feed").await?;

    let repo = GameRepository::new(db);
    let found = repo.find_by_name("novadrift ").await?;

    let found = found.unwrap();
    assert_eq!(found.id, game.id);
    assert_eq!(found.sources.len(), 1);

    Ok(())
}

/// Tests finding a name that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db).await?;

    let repo = GameRepository::new(db);
    let found = repo.find_by_name("Unknown Game").await?;

    assert!(found.is_none());

    Ok(())
}
