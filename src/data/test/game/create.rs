use super::*;

/// Tests creating a game with sources.
///
/// Verifies that the repository stores the game, its normalized name, and its sources
/// in list order without markers.
///
/// Expected: Ok with game and ordered sources
#[tokio::test]
async fn creates_game_with_ordered_sources() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let game = repo
        .create(CreateGameParam {
            name: "Hollow Knight Silksong".to_string(),
            sources: vec![
                source(SourceType::ExternalFeed, "1030300"),
                source(SourceType::InternalFeed, "1030300"),
            ],
            release_date: None,
        })
        .await?;

    assert_eq!(game.name, "Hollow Knight Silksong");
    assert_eq!(game.sources.len(), 2);
    assert_eq!(game.sources[0].source_type, SourceType::ExternalFeed);
    assert_eq!(game.sources[1].source_type, SourceType::InternalFeed);
    assert!(game.sources.iter().all(|s| s.last_update.is_none()));

    let stored = entity::prelude::Game::find_by_id(game.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.normalized_name, "hollowknightsilksong");

    Ok(())
}

/// Tests creating a game whose normalized name is taken.
///
/// Verifies that names differing only in case and whitespace collide.
///
/// Expected: Err
#[tokio::test]
async fn rejects_duplicate_normalized_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db)
        .name("Nova Drift")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let result = repo
        .create(CreateGameParam {
            name: "  nova DRIFT".to_string(),
            sources: Vec::new(),
            release_date: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
