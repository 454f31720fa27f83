//! Update marker store.
//!
//! The marker of a `(game, source type)` pair lives in the `last_update` column of its
//! `game_source` row. Writes are single-row updates, so concurrent writers of the same
//! row are serialized by the database.

use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::model::game::SourceType;

pub struct GameSourceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameSourceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored marker for a game's source.
    ///
    /// # Returns
    /// - `Ok(Some(marker))`: A marker has been stored
    /// - `Ok(None)`: No marker yet, or the game has no source of this type
    /// - `Err(DbErr)`: Database error
    pub async fn get_marker(
        &self,
        game_id: i32,
        source_type: SourceType,
    ) -> Result<Option<String>, DbErr> {
        let marker: Option<Option<String>> = entity::prelude::GameSource::find()
            .select_only()
            .column(entity::game_source::Column::LastUpdate)
            .filter(entity::game_source::Column::GameId.eq(game_id))
            .filter(entity::game_source::Column::SourceType.eq(source_type.as_str()))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(marker.flatten())
    }

    /// Stores the marker for a game's source.
    ///
    /// # Returns
    /// - `Ok(true)`: Marker stored
    /// - `Ok(false)`: The game has no source of this type (removed meanwhile)
    /// - `Err(DbErr)`: Database error
    pub async fn set_marker(
        &self,
        game_id: i32,
        source_type: SourceType,
        marker: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::GameSource::update_many()
            .col_expr(
                entity::game_source::Column::LastUpdate,
                Expr::value(marker.to_string()),
            )
            .filter(entity::game_source::Column::GameId.eq(game_id))
            .filter(entity::game_source::Column::SourceType.eq(source_type.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
