//! Game source factory for creating test source rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test game sources with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let source = GameSourceFactory::new(&db, game.id, "internal-feed")
///     .source_id("1145360")
///     .last_update(Some("1700000000000"))
///     .build()
///     .await?;
/// ```
pub struct GameSourceFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: i32,
    source_type: String,
    source_id: String,
    last_update: Option<String>,
    position: i32,
}

impl<'a> GameSourceFactory<'a> {
    /// Creates a new GameSourceFactory with default values.
    ///
    /// Defaults:
    /// - source_id: auto-incremented numeric string
    /// - last_update: `None`
    /// - position: `0`
    pub fn new(
        db: &'a DatabaseConnection,
        game_id: i32,
        source_type: impl Into<String>,
    ) -> Self {
        Self {
            db,
            game_id,
            source_type: source_type.into(),
            source_id: next_id().to_string(),
            last_update: None,
            position: 0,
        }
    }

    /// Sets the upstream source identifier.
    pub fn source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }

    /// Sets the stored last-update marker.
    pub fn last_update(mut self, last_update: Option<&str>) -> Self {
        self.last_update = last_update.map(str::to_string);
        self
    }

    /// Sets the ordering position within the game's source list.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Builds and inserts the game source entity into the database.
    pub async fn build(self) -> Result<entity::game_source::Model, DbErr> {
        entity::game_source::ActiveModel {
            id: ActiveValue::NotSet,
            game_id: ActiveValue::Set(self.game_id),
            source_type: ActiveValue::Set(self.source_type),
            source_id: ActiveValue::Set(self.source_id),
            last_update: ActiveValue::Set(self.last_update),
            position: ActiveValue::Set(self.position),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a source of the given type with no stored marker.
pub async fn create_game_source(
    db: &DatabaseConnection,
    game_id: i32,
    source_type: impl Into<String>,
) -> Result<entity::game_source::Model, DbErr> {
    GameSourceFactory::new(db, game_id, source_type)
        .build()
        .await
}
