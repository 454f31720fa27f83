//! Ledger of release milestones already announced.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, SqlErr,
};

use crate::model::release::Milestone;

pub struct ReleaseAnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReleaseAnnouncementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Claims a milestone of a game for the given release date.
    ///
    /// The first claim inserts the ledger row and wins; every later claim for the same
    /// `(game, milestone, release date)` loses, including one racing on the unique index.
    ///
    /// # Returns
    /// - `Ok(true)`: Claimed, the caller should announce
    /// - `Ok(false)`: Already claimed earlier
    /// - `Err(DbErr)`: Database error
    pub async fn claim(
        &self,
        game_id: i32,
        milestone: Milestone,
        release_date: NaiveDate,
    ) -> Result<bool, DbErr> {
        if self.exists(game_id, milestone, release_date).await? {
            return Ok(false);
        }

        let result = entity::release_announcement::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            milestone: ActiveValue::Set(milestone.as_str().to_string()),
            release_date: ActiveValue::Set(release_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Checks whether a milestone has been claimed for the given release date.
    pub async fn exists(
        &self,
        game_id: i32,
        milestone: Milestone,
        release_date: NaiveDate,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::ReleaseAnnouncement::find()
            .filter(entity::release_announcement::Column::GameId.eq(game_id))
            .filter(entity::release_announcement::Column::Milestone.eq(milestone.as_str()))
            .filter(entity::release_announcement::Column::ReleaseDate.eq(release_date))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
