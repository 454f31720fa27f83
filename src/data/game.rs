//! Game registry repository.
//!
//! Reads games together with their ordered sources, and performs the few mutations the
//! engine and registration flow need: creation, wholesale source replacement, release
//! date updates, and cascading removal.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::model::game::{normalize_name, CreateGameParam, Game, SourceParam};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a game with its sources in a single transaction.
    ///
    /// Sources are stored with no marker so that the first check establishes a baseline.
    ///
    /// # Returns
    /// - `Ok(Game)`: The created game with its sources
    /// - `Err(DbErr)`: Database error, including a duplicate normalized name
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, DbErr> {
        let txn = self.db.begin().await?;

        let game = entity::game::ActiveModel {
            normalized_name: ActiveValue::Set(normalize_name(&param.name)),
            name: ActiveValue::Set(param.name),
            release_date: ActiveValue::Set(param.release_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let sources = insert_sources(&txn, game.id, param.sources, &HashMap::new()).await?;

        txn.commit().await?;

        Ok(Game::from_entity(game, sources))
    }

    /// Gets a game by ID with its sources
    ///
    /// # Returns
    /// - `Ok(Some(Game))`: Game found
    /// - `Ok(None)`: No game with this ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let Some(game) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let sources = entity::prelude::GameSource::find()
            .filter(entity::game_source::Column::GameId.eq(id))
            .order_by_asc(entity::game_source::Column::Position)
            .all(self.db)
            .await?;

        Ok(Some(Game::from_entity(game, sources)))
    }

    /// Finds a game by name, ignoring whitespace and case.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Game>, DbErr> {
        let game = entity::prelude::Game::find()
            .filter(entity::game::Column::NormalizedName.eq(normalize_name(name)))
            .one(self.db)
            .await?;

        match game {
            Some(game) => self.with_sources(vec![game]).await.map(|mut g| g.pop()),
            None => Ok(None),
        }
    }

    /// Gets every game, ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let games = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        self.with_sources(games).await
    }

    /// Gets games whose release date is still unknown.
    pub async fn get_missing_release_date(&self) -> Result<Vec<Game>, DbErr> {
        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::ReleaseDate.is_null())
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        self.with_sources(games).await
    }

    /// Gets games releasing on the given calendar date.
    pub async fn get_releasing_on(&self, date: NaiveDate) -> Result<Vec<Game>, DbErr> {
        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::ReleaseDate.eq(date))
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        self.with_sources(games).await
    }

    /// Sets the release date of a game.
    ///
    /// # Returns
    /// - `Ok(previous)`: The release date stored before this update
    /// - `Err(DbErr::RecordNotFound)`: No game with this ID
    /// - `Err(DbErr)`: Database error
    pub async fn set_release_date(
        &self,
        id: i32,
        release_date: NaiveDate,
    ) -> Result<Option<NaiveDate>, DbErr> {
        let game = entity::prelude::Game::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Game {} not found", id)))?;

        let previous = game.release_date;

        let mut active: entity::game::ActiveModel = game.into();
        active.release_date = ActiveValue::Set(Some(release_date));
        active.update(self.db).await?;

        Ok(previous)
    }

    /// Replaces the sources of a game wholesale.
    ///
    /// A source whose type and upstream ID are unchanged keeps its marker; any other
    /// source starts again without a marker.
    ///
    /// # Returns
    /// - `Ok(Some(Game))`: The game with its new sources
    /// - `Ok(None)`: No game with this ID
    /// - `Err(DbErr)`: Database error
    pub async fn replace_sources(
        &self,
        id: i32,
        sources: Vec<SourceParam>,
    ) -> Result<Option<Game>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(game) = entity::prelude::Game::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let previous = entity::prelude::GameSource::find()
            .filter(entity::game_source::Column::GameId.eq(id))
            .all(&txn)
            .await?;

        let kept_markers: HashMap<(String, String), String> = previous
            .into_iter()
            .filter_map(|s| {
                s.last_update
                    .map(|marker| ((s.source_type, s.source_id), marker))
            })
            .collect();

        entity::prelude::GameSource::delete_many()
            .filter(entity::game_source::Column::GameId.eq(id))
            .exec(&txn)
            .await?;

        let sources = insert_sources(&txn, id, sources, &kept_markers).await?;

        txn.commit().await?;

        Ok(Some(Game::from_entity(game, sources)))
    }

    /// Deletes a game along with its sources, subscriptions and announcements.
    ///
    /// # Returns
    /// - `Ok(true)`: Game deleted
    /// - `Ok(false)`: No game with this ID
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::GameSource::delete_many()
            .filter(entity::game_source::Column::GameId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::GameSubscription::delete_many()
            .filter(entity::game_subscription::Column::GameId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::ReleaseAnnouncement::delete_many()
            .filter(entity::release_announcement::Column::GameId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Game::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads the sources of the given games in one query and assembles domain models.
    async fn with_sources(&self, games: Vec<entity::game::Model>) -> Result<Vec<Game>, DbErr> {
        if games.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = games.iter().map(|g| g.id).collect();

        let mut sources_by_game: HashMap<i32, Vec<entity::game_source::Model>> = HashMap::new();
        for source in entity::prelude::GameSource::find()
            .filter(entity::game_source::Column::GameId.is_in(ids))
            .order_by_asc(entity::game_source::Column::Position)
            .all(self.db)
            .await?
        {
            sources_by_game
                .entry(source.game_id)
                .or_default()
                .push(source);
        }

        Ok(games
            .into_iter()
            .map(|game| {
                let sources = sources_by_game.remove(&game.id).unwrap_or_default();
                Game::from_entity(game, sources)
            })
            .collect())
    }
}

/// Inserts source rows in list order, restoring markers found in `kept_markers`.
async fn insert_sources<C: ConnectionTrait>(
    db: &C,
    game_id: i32,
    sources: Vec<SourceParam>,
    kept_markers: &HashMap<(String, String), String>,
) -> Result<Vec<entity::game_source::Model>, DbErr> {
    let mut inserted = Vec::with_capacity(sources.len());

    for (position, source) in sources.into_iter().enumerate() {
        let source_type = source.source_type.as_str().to_string();
        let last_update = kept_markers
            .get(&(source_type.clone(), source.source_id.clone()))
            .cloned();

        let model = entity::game_source::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            source_type: ActiveValue::Set(source_type),
            source_id: ActiveValue::Set(source.source_id),
            last_update: ActiveValue::Set(last_update),
            position: ActiveValue::Set(position as i32),
            ..Default::default()
        }
        .insert(db)
        .await?;

        inserted.push(model);
    }

    Ok(inserted)
}
