//! Composition root of the scheduling engine.
//!
//! Owns the shared `JobScheduler`, one `PollingWatcher` per source type and the
//! `ReleaseScheduler`. Entity mutations go through `force_check` so edited games are
//! re-checked without waiting for the next tick.
//!
//! `stop_all` shuts the job scheduler down and replaces it with a fresh one, so a stopped
//! coordinator can be started again.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::{Mutex, RwLock};
use tokio_cron_scheduler::JobScheduler;

use crate::{
    error::{config::ConfigError, AppError},
    model::game::SourceType,
    scheduler::{release::ReleaseScheduler, watcher::PollingWatcher},
};

pub struct WatcherCoordinator {
    /// Never shut down while held here; `stop_all` swaps in a new one.
    scheduler: Mutex<JobScheduler>,
    watchers: RwLock<Vec<Arc<PollingWatcher>>>,
    release: Arc<ReleaseScheduler>,
    started: AtomicBool,
}

impl WatcherCoordinator {
    /// Creates a coordinator with its own job scheduler and no watchers.
    pub async fn new(release: Arc<ReleaseScheduler>) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            scheduler: Mutex::new(scheduler),
            watchers: RwLock::new(Vec::new()),
            release,
            started: AtomicBool::new(false),
        })
    }

    /// Initializes a watcher and registers it.
    ///
    /// A watcher added after `start_all` is not started until the next `start_all`.
    ///
    /// # Returns
    /// - `Ok(Arc<PollingWatcher>)`: The registered watcher
    /// - `Err(AppError::ConfigErr)`: A watcher for this source type is already registered
    /// - `Err(AppError::FetchErr)`: The fetcher's setup failed
    pub async fn add_watcher(
        &self,
        watcher: PollingWatcher,
    ) -> Result<Arc<PollingWatcher>, AppError> {
        let source_type = watcher.source_type();

        if self.has_watcher(source_type).await {
            return Err(ConfigError::DuplicateWatcher {
                watcher: source_type.to_string(),
            }
            .into());
        }

        watcher.init().await?;

        let watcher = Arc::new(watcher);
        self.watchers.write().await.push(watcher.clone());

        tracing::info!(
            "Registered {} watcher ({:?} interval)",
            source_type.label(),
            watcher.check_interval()
        );

        Ok(watcher)
    }

    /// Starts every watcher and the release scheduler.
    ///
    /// # Returns
    /// - `Ok(())`: Everything scheduled, first checks running in the background
    /// - `Err(AppError::ConfigErr)`: A watcher or the release scheduler is misconfigured
    /// - `Err(AppError::SchedulerErr)`: The job scheduler failed
    pub async fn start_all(&self) -> Result<(), AppError> {
        let scheduler = self.scheduler.lock().await;

        for watcher in self.watchers.read().await.iter() {
            watcher.start(&scheduler).await?;
        }

        self.release.start(&scheduler).await?;

        if !self.started.swap(true, Ordering::SeqCst) {
            scheduler.start().await?;
        }

        tracing::info!("Watcher coordinator started");

        Ok(())
    }

    /// Stops every watcher and the release scheduler, waiting for in-flight passes.
    ///
    /// # Returns
    /// - `Ok(())`: Everything stopped; per-watcher stop failures were logged
    /// - `Err(AppError::SchedulerErr)`: Shutting down or replacing the job scheduler failed
    pub async fn stop_all(&self) -> Result<(), AppError> {
        let mut scheduler = self.scheduler.lock().await;

        for watcher in self.watchers.read().await.iter() {
            if let Err(e) = watcher.stop(&scheduler).await {
                tracing::error!("Error stopping {} watcher: {}", watcher.source_type(), e);
            }
        }

        if let Err(e) = self.release.stop(&scheduler).await {
            tracing::error!("Error stopping release scheduler: {}", e);
        }

        if self.started.swap(false, Ordering::SeqCst) {
            scheduler.shutdown().await?;
            *scheduler = JobScheduler::new().await?;
        }

        tracing::info!("Watcher coordinator stopped");

        Ok(())
    }

    /// Re-checks one game on every watcher.
    ///
    /// Failures are logged per watcher and never returned.
    pub async fn force_check(&self, game_id: i32) {
        let watchers = self.watchers.read().await.clone();

        for watcher in watchers {
            if let Err(e) = watcher.check_one(game_id).await {
                tracing::error!(
                    "Forced {} check of game {} failed: {}",
                    watcher.source_type(),
                    game_id,
                    e
                );
            }
        }
    }

    pub fn release_scheduler(&self) -> &Arc<ReleaseScheduler> {
        &self.release
    }

    /// Source types that currently have a watcher, in registration order.
    pub async fn source_types(&self) -> Vec<SourceType> {
        self.watchers
            .read()
            .await
            .iter()
            .map(|w| w.source_type())
            .collect()
    }

    async fn has_watcher(&self, source_type: SourceType) -> bool {
        self.watchers
            .read()
            .await
            .iter()
            .any(|w| w.source_type() == source_type)
    }
}
