use super::*;

/// Tests deleting a game.
///
/// Verifies that the game's sources, subscriptions and announcements are removed with it
/// while other games are untouched.
///
/// Expected: Ok(true) with dependent rows deleted
#[tokio::test]
async fn deletes_game_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, _destination) = factory::helpers::create_subscribed_game(db).await?;
    factory::create_game_source(db, game.id, "internal-feed").await?;
    let other = factory::create_game(db).await?;
    factory::create_game_source(db, other.id, "internal-feed").await?;

    crate::data::release_announcement::ReleaseAnnouncementRepository::new(db)
        .claim(
            game.id,
            crate::model::release::Milestone::ReleasingToday,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )
        .await?;

    let repo = GameRepository::new(db);
    let deleted = repo.delete(game.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Game::find_by_id(game.id)
        .one(db)
        .await?
        .is_none());

    let sources = entity::prelude::GameSource::find()
        .filter(entity::game_source::Column::GameId.eq(game.id))
        .count(db)
        .await?;
    let subscriptions = entity::prelude::GameSubscription::find()
        .filter(entity::game_subscription::Column::GameId.eq(game.id))
        .count(db)
        .await?;
    let announcements = entity::prelude::ReleaseAnnouncement::find()
        .filter(entity::release_announcement::Column::GameId.eq(game.id))
        .count(db)
        .await?;
    assert_eq!(sources, 0);
    assert_eq!(subscriptions, 0);
    assert_eq!(announcements, 0);

    assert_eq!(repo.get_by_id(other.id).await?.unwrap().sources.len(), 1);

    Ok(())
}

/// Tests deleting a game that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}
