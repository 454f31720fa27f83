//! Polling watcher for one source type.
//!
//! Each pass walks every game that has a source of the watcher's type, fetches the latest
//! items, and compares the newest one against the stored marker:
//! - no stored marker: the fetched marker is stored as a silent baseline
//! - fetched marker not newer than the stored one: nothing happens
//! - fetched marker newer: the update is notified, then the marker is persisted
//!
//! The marker only advances after a successful delivery, so a failed notification is
//! retried on the next tick. Failures of one game never abort the rest of the pass.

use sea_orm::DatabaseConnection;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::{game::GameRepository, game_source::GameSourceRepository},
    error::{config::ConfigError, fetch::FetchError, AppError},
    fetcher::SourceFetcher,
    model::{
        game::{Game, GameSource, SourceType},
        news::{latest_item, Marker, NewsItem},
    },
    notifier::NotificationSink,
    scheduler::ScheduledJob,
};

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct PollingWatcher {
    db: DatabaseConnection,
    fetcher: Arc<dyn SourceFetcher>,
    sink: Arc<dyn NotificationSink>,
    check_interval: Duration,
    fetch_timeout: Duration,
    /// Held for the duration of a pass; passes of one watcher never overlap.
    pass_lock: Mutex<()>,
    job: Mutex<Option<ScheduledJob>>,
    /// Set by `stop`; a tick that was already dispatched sees it once it gets the lock.
    stopped: AtomicBool,
}

impl PollingWatcher {
    /// Creates a new watcher. Performs no I/O.
    ///
    /// # Arguments
    /// - `db` - Database connection for the game registry and marker store
    /// - `fetcher` - Fetcher of the source type this watcher serves
    /// - `sink` - Destination of update notifications
    /// - `check_interval` - Delay between two scheduled passes
    pub fn new(
        db: DatabaseConnection,
        fetcher: Arc<dyn SourceFetcher>,
        sink: Arc<dyn NotificationSink>,
        check_interval: Duration,
    ) -> Self {
        Self {
            db,
            fetcher,
            sink,
            check_interval,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            pass_lock: Mutex::new(()),
            job: Mutex::new(None),
            stopped: AtomicBool::new(false),
        }
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub fn source_type(&self) -> SourceType {
        self.fetcher.source_type()
    }

    pub fn check_interval(&self) -> Duration {
        self.check_interval
    }

    /// Runs the fetcher's one-time setup.
    pub async fn init(&self) -> Result<(), AppError> {
        self.fetcher.init().await?;

        Ok(())
    }

    /// Schedules a pass every check interval and starts one immediately.
    ///
    /// Calling `start` on a running watcher does nothing.
    ///
    /// # Returns
    /// - `Ok(())`: Watcher scheduled
    /// - `Err(AppError::ConfigErr)`: The check interval is zero
    /// - `Err(AppError::SchedulerErr)`: The job could not be registered
    pub async fn start(self: &Arc<Self>, scheduler: &JobScheduler) -> Result<(), AppError> {
        if self.check_interval.is_zero() {
            return Err(ConfigError::InvalidInterval {
                watcher: self.source_type().to_string(),
            }
            .into());
        }

        let mut job = self.job.lock().await;
        if job.is_some() {
            return Ok(());
        }

        self.stopped.store(false, Ordering::SeqCst);

        let job_watcher = self.clone();
        let repeated = Job::new_repeated_async(self.check_interval, move |_uuid, _lock| {
            let watcher = job_watcher.clone();

            Box::pin(async move {
                watcher.scheduled_tick().await;
            })
        })?;

        let job_id = scheduler.add(repeated).await?;

        let first_watcher = self.clone();
        let first_run = tokio::spawn(async move {
            first_watcher.scheduled_tick().await;
        });

        *job = Some(ScheduledJob { job_id, first_run });

        tracing::info!(
            "{} watcher started, checking every {:?}",
            self.source_type().label(),
            self.check_interval
        );

        Ok(())
    }

    /// Cancels future passes and waits for an in-flight pass to finish. Idempotent.
    ///
    /// No scheduled pass starts after `stop` returns, including a tick the scheduler had
    /// already dispatched.
    pub async fn stop(&self, scheduler: &JobScheduler) -> Result<(), AppError> {
        self.stopped.store(true, Ordering::SeqCst);

        let job = self.job.lock().await.take();

        if let Some(job) = job {
            job.cancel(scheduler).await?;
        }

        let _drained = self.pass_lock.lock().await;

        tracing::info!("{} watcher stopped", self.source_type().label());

        Ok(())
    }

    /// Entry point of scheduled runs; skips the tick while a pass is still running.
    pub(super) async fn scheduled_tick(&self) {
        let Ok(_guard) = self.pass_lock.try_lock() else {
            tracing::debug!(
                "Skipping {} check, previous pass still running",
                self.source_type()
            );
            return;
        };

        if self.stopped.load(Ordering::SeqCst) {
            tracing::debug!("Skipping {} check, watcher stopped", self.source_type());
            return;
        }

        if let Err(e) = self.run_pass().await {
            tracing::error!("Error checking {} sources: {}", self.source_type(), e);
        }
    }

    /// Checks every game that has a source of this watcher's type.
    ///
    /// Waits for an in-flight pass rather than running alongside it.
    ///
    /// # Returns
    /// - `Ok(())`: Pass completed; per-game failures were logged
    /// - `Err(AppError)`: The game registry could not be read
    pub async fn check_all(&self) -> Result<(), AppError> {
        let _guard = self.pass_lock.lock().await;

        self.run_pass().await
    }

    /// Checks a single game right away, typically after its sources were edited.
    ///
    /// # Returns
    /// - `Ok(())`: Game checked, or it has no source of this type, or it does not exist
    /// - `Err(AppError)`: The game registry could not be read
    pub async fn check_one(&self, game_id: i32) -> Result<(), AppError> {
        let _guard = self.pass_lock.lock().await;

        let Some(game) = GameRepository::new(&self.db).get_by_id(game_id).await? else {
            tracing::debug!("Game {} no longer exists, nothing to check", game_id);
            return Ok(());
        };

        self.check_game(&game).await;

        Ok(())
    }

    async fn run_pass(&self) -> Result<(), AppError> {
        let games = GameRepository::new(&self.db).get_all().await?;

        for game in &games {
            self.check_game(game).await;
        }

        Ok(())
    }

    /// Checks the game's source of this type; failures are logged, never returned.
    async fn check_game(&self, game: &Game) {
        let source_type = self.source_type();

        let Some(source) = game.source(source_type) else {
            return;
        };

        if let Err(e) = self.check_source(game, source).await {
            tracing::error!(
                "Failed to check {} source '{}' of game {} ({}): {}",
                source_type,
                source.source_id,
                game.id,
                game.name,
                e
            );
        }
    }

    async fn check_source(&self, game: &Game, source: &GameSource) -> Result<(), AppError> {
        let source_type = source.source_type;

        let items = self.fetch(source).await?;

        let Some((fetched, item)) = latest_item(&items) else {
            tracing::debug!(
                "No {} items for game {} ({})",
                source_type,
                game.id,
                game.name
            );
            return Ok(());
        };

        let markers = GameSourceRepository::new(&self.db);

        let Some(stored) = markers.get_marker(game.id, source_type).await? else {
            markers
                .set_marker(game.id, source_type, &fetched.to_string())
                .await?;

            tracing::info!(
                "Stored baseline {} marker {} for game {} ({})",
                source_type,
                fetched,
                game.id,
                game.name
            );
            return Ok(());
        };

        let stored: Marker = stored.parse()?;

        if fetched <= stored {
            tracing::debug!(
                "No new {} update for game {} ({})",
                source_type,
                game.id,
                game.name
            );
            return Ok(());
        }

        let report = self.sink.notify_update(game, source_type, item).await?;

        if report.is_failure() {
            tracing::warn!(
                "Update '{}' of game {} ({}) reached no destination, retrying next tick",
                item.title,
                game.id,
                game.name
            );
            return Ok(());
        }

        markers
            .set_marker(game.id, source_type, &fetched.to_string())
            .await?;

        tracing::info!(
            "Notified {} update '{}' of game {} ({}) to {} destinations",
            source_type,
            item.title,
            game.id,
            game.name,
            report.delivered
        );

        Ok(())
    }

    async fn fetch(&self, source: &GameSource) -> Result<Vec<NewsItem>, FetchError> {
        tokio::time::timeout(
            self.fetch_timeout,
            self.fetcher.fetch_latest(&source.source_id),
        )
        .await
        .map_err(|_| FetchError::Timeout {
            source_type: source.source_type.to_string(),
            source_id: source.source_id.clone(),
            after: self.fetch_timeout,
        })?
    }
}
