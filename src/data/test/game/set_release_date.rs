use super::*;

/// Tests setting a release date on a game that had none.
///
/// Expected: Ok(None) as previous date, new date stored
#[tokio::test]
async fn sets_first_release_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let repo = GameRepository::new(db);
    let previous = repo.set_release_date(game.id, date).await?;

    assert!(previous.is_none());

    let stored = repo.get_by_id(game.id).await?.unwrap();
    assert_eq!(stored.release_date, Some(date));

    Ok(())
}

/// Tests moving an existing release date.
///
/// Expected: Ok(Some(old date))
#[tokio::test]
async fn returns_previous_release_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let new = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let game = factory::game::GameFactory::new(db)
        .release_date(Some(old))
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let previous = repo.set_release_date(game.id, new).await?;

    assert_eq!(previous, Some(old));

    Ok(())
}

/// Tests setting a release date on a missing game.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let result = repo
        .set_release_date(999, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
