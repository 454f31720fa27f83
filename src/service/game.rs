use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};
use std::collections::HashSet;

use crate::{
    data::game::GameRepository,
    error::AppError,
    model::game::{normalize_name, CreateGameParam, Game, SourceParam},
    scheduler::coordinator::WatcherCoordinator,
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
    coordinator: &'a WatcherCoordinator,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection, coordinator: &'a WatcherCoordinator) -> Self {
        Self { db, coordinator }
    }

    /// Registers a new game.
    ///
    /// Every watcher checks the game right away so its sources get a baseline marker, and
    /// a release date given at registration is checked against today's milestones.
    ///
    /// # Returns
    /// - `Ok(Game)`: The registered game, markers included
    /// - `Err(AppError::BadRequest)`: Empty or already registered name, invalid sources
    /// - `Err(AppError)`: Database error
    pub async fn register(&self, param: CreateGameParam) -> Result<Game, AppError> {
        let name = param.name.trim().to_string();
        if normalize_name(&name).is_empty() {
            return Err(AppError::BadRequest("Game name cannot be empty".to_string()));
        }

        validate_sources(&param.sources)?;

        let repo = GameRepository::new(self.db);

        if let Some(existing) = repo.find_by_name(&name).await? {
            return Err(AppError::BadRequest(format!(
                "Game '{}' is already registered",
                existing.name
            )));
        }

        let release_date = param.release_date;
        let game = repo
            .create(CreateGameParam {
                name,
                sources: param.sources,
                release_date,
            })
            .await?;

        tracing::info!("Registered game {} ({})", game.id, game.name);

        self.coordinator.force_check(game.id).await;

        if release_date.is_some() {
            self.coordinator
                .release_scheduler()
                .on_release_date_set(game.id, None)
                .await?;
        }

        self.get_game(game.id).await
    }

    /// Replaces the sources of a game and re-checks it.
    ///
    /// # Returns
    /// - `Ok(Game)`: The game with its new sources
    /// - `Err(AppError::NotFound)`: No game with this ID
    /// - `Err(AppError::BadRequest)`: Invalid sources
    /// - `Err(AppError)`: Database error
    pub async fn update_sources(
        &self,
        id: i32,
        sources: Vec<SourceParam>,
    ) -> Result<Game, AppError> {
        validate_sources(&sources)?;

        GameRepository::new(self.db)
            .replace_sources(id, sources)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", id)))?;

        self.coordinator.force_check(id).await;

        self.get_game(id).await
    }

    /// Sets the release date of a game and fires the matching announcements.
    ///
    /// # Returns
    /// - `Ok(Game)`: The updated game
    /// - `Err(AppError::NotFound)`: No game with this ID
    /// - `Err(AppError)`: Database error
    pub async fn set_release_date(
        &self,
        id: i32,
        release_date: NaiveDate,
    ) -> Result<Game, AppError> {
        let previous = GameRepository::new(self.db)
            .set_release_date(id, release_date)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotFound(message) => AppError::NotFound(message),
                e => AppError::DbErr(e),
            })?;

        self.coordinator
            .release_scheduler()
            .on_release_date_set(id, previous)
            .await?;

        self.get_game(id).await
    }

    /// Removes a game with its sources and subscriptions.
    ///
    /// # Returns
    /// - `Ok(())`: Game removed
    /// - `Err(AppError::NotFound)`: No game with this ID
    /// - `Err(AppError)`: Database error
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        let deleted = GameRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound(format!("Game {} not found", id)));
        }

        tracing::info!("Removed game {}", id);

        Ok(())
    }

    async fn get_game(&self, id: i32) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", id)))
    }
}

/// Rejects blank source IDs and repeated source types.
fn validate_sources(sources: &[SourceParam]) -> Result<(), AppError> {
    let mut seen = HashSet::new();

    for source in sources {
        if source.source_id.trim().is_empty() {
            return Err(AppError::BadRequest(format!(
                "Source ID for {} cannot be empty",
                source.source_type.label()
            )));
        }

        if !seen.insert(source.source_type) {
            return Err(AppError::BadRequest(format!(
                "Only one {} source is allowed per game",
                source.source_type.label()
            )));
        }
    }

    Ok(())
}
