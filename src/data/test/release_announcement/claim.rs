use super::*;

/// Tests claiming a milestone twice.
///
/// Expected: first claim Ok(true), second claim Ok(false)
#[tokio::test]
async fn claims_milestone_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    let repo = ReleaseAnnouncementRepository::new(db);

    assert!(repo.claim(game.id, Milestone::ReleasingToday, date).await?);
    assert!(!repo.claim(game.id, Milestone::ReleasingToday, date).await?);
    assert!(repo.exists(game.id, Milestone::ReleasingToday, date).await?);

    Ok(())
}

/// Tests that claims are independent per milestone and per release date.
///
/// Verifies that a moved release date yields a fresh milestone.
///
/// Expected: Ok(true) for every distinct claim
#[tokio::test]
async fn separates_milestones_and_release_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let delayed = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();

    let repo = ReleaseAnnouncementRepository::new(db);

    assert!(repo.claim(game.id, Milestone::ReleasingSoon, date).await?);
    assert!(repo.claim(game.id, Milestone::ReleasingToday, date).await?);
    assert!(repo.claim(game.id, Milestone::ReleasingSoon, delayed).await?);
    assert!(!repo.exists(game.id, Milestone::ReleasingToday, delayed).await?);

    Ok(())
}
