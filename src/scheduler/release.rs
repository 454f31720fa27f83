//! Daily release announcements.
//!
//! `run_once` executes three passes in a fixed order against a single "today":
//! 1. Backfill: games without a release date get one from a `ReleaseDateLookup`
//! 2. Today: games releasing today are announced as released
//! 3. Upcoming: games releasing in `upcoming_days` are announced as releasing soon
//!
//! Backfill runs first so a date it discovers is seen by the same run's announcements.
//! Each milestone is claimed in the announcement ledger before it is sent, so it is
//! announced at most once per game and release date, even across restarts. A failed
//! delivery is logged and not retried.

use chrono::{Days, NaiveDate};
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
    data::{game::GameRepository, release_announcement::ReleaseAnnouncementRepository},
    error::{config::ConfigError, fetch::FetchError, AppError},
    fetcher::ReleaseDateLookup,
    model::{
        game::{Game, GameSource},
        release::Milestone,
    },
    notifier::NotificationSink,
    scheduler::{clock::Clock, ScheduledJob},
};

const DEFAULT_SCHEDULE: &str = "0 0 0 * * *";
const DEFAULT_UPCOMING_DAYS: u64 = 7;
const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ReleaseScheduler {
    db: DatabaseConnection,
    sink: Arc<dyn NotificationSink>,
    lookups: Vec<Arc<dyn ReleaseDateLookup>>,
    clock: Arc<dyn Clock>,
    /// Six-field cron expression, evaluated in UTC.
    schedule: String,
    upcoming_days: u64,
    lookup_timeout: Duration,
    run_lock: Mutex<()>,
    job: Mutex<Option<ScheduledJob>>,
    stopped: AtomicBool,
}

impl ReleaseScheduler {
    /// Creates a new release scheduler running daily at midnight UTC. Performs no I/O.
    ///
    /// # Arguments
    /// - `db` - Database connection for the game registry and announcement ledger
    /// - `sink` - Destination of release announcements
    /// - `clock` - Source of "today"
    pub fn new(
        db: DatabaseConnection,
        sink: Arc<dyn NotificationSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            db,
            sink,
            lookups: Vec::new(),
            clock,
            schedule: DEFAULT_SCHEDULE.to_string(),
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            run_lock: Mutex::new(()),
            job: Mutex::new(None),
            stopped: AtomicBool::new(false),
        }
    }

    /// Adds an authoritative release date lookup used by the backfill pass.
    pub fn with_lookup(mut self, lookup: Arc<dyn ReleaseDateLookup>) -> Self {
        self.lookups.push(lookup);
        self
    }

    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    pub fn with_upcoming_days(mut self, upcoming_days: u64) -> Self {
        self.upcoming_days = upcoming_days;
        self
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    /// Schedules the daily run and starts one immediately.
    ///
    /// Calling `start` on a running scheduler does nothing.
    ///
    /// # Returns
    /// - `Ok(())`: Scheduler started
    /// - `Err(AppError::ConfigErr)`: The upcoming window is zero days
    /// - `Err(AppError::SchedulerErr)`: Invalid cron expression or registration failure
    pub async fn start(self: &Arc<Self>, scheduler: &JobScheduler) -> Result<(), AppError> {
        if self.upcoming_days == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "RELEASE_UPCOMING_DAYS".to_string(),
                value: self.upcoming_days.to_string(),
                reason: "must be at least one day".to_string(),
            }
            .into());
        }

        let mut job = self.job.lock().await;
        if job.is_some() {
            return Ok(());
        }

        self.stopped.store(false, Ordering::SeqCst);

        let job_scheduler = self.clone();
        let daily = Job::new_async(self.schedule.as_str(), move |_uuid, _lock| {
            let release = job_scheduler.clone();

            Box::pin(async move {
                release.scheduled_run().await;
            })
        })?;

        let job_id = scheduler.add(daily).await?;

        let first_scheduler = self.clone();
        let first_run = tokio::spawn(async move {
            first_scheduler.scheduled_run().await;
        });

        *job = Some(ScheduledJob { job_id, first_run });

        tracing::info!("Release scheduler started on '{}'", self.schedule);

        Ok(())
    }

    /// Cancels future runs and waits for an in-flight run to finish. Idempotent.
    pub async fn stop(&self, scheduler: &JobScheduler) -> Result<(), AppError> {
        self.stopped.store(true, Ordering::SeqCst);

        let job = self.job.lock().await.take();

        if let Some(job) = job {
            job.cancel(scheduler).await?;
        }

        let _drained = self.run_lock.lock().await;

        tracing::info!("Release scheduler stopped");

        Ok(())
    }

    /// Runs the backfill, today and upcoming passes in that order.
    ///
    /// # Returns
    /// - `Ok(())`: All passes completed; per-game failures were logged
    /// - `Err(AppError)`: The game registry could not be read
    pub async fn run_once(&self) -> Result<(), AppError> {
        let _guard = self.run_lock.lock().await;

        self.run_passes().await
    }

    /// Entry point of scheduled runs; a run queued behind `stop` does nothing.
    pub(super) async fn scheduled_run(&self) {
        let _guard = self.run_lock.lock().await;

        if self.stopped.load(Ordering::SeqCst) {
            tracing::debug!("Skipping release checks, scheduler stopped");
            return;
        }

        if let Err(e) = self.run_passes().await {
            tracing::error!("Error running release checks: {}", e);
        }
    }

    async fn run_passes(&self) -> Result<(), AppError> {
        let today = self.clock.today();

        self.backfill().await?;
        self.announce_releasing_on(today, Milestone::ReleasingToday).await?;
        self.announce_releasing_on(self.upcoming_date(today), Milestone::ReleasingSoon).await?;

        Ok(())
    }

    /// Reacts to a release date being set on a game by the registration flow.
    ///
    /// Announces the change when a previous, different date existed, then fires the
    /// today or upcoming milestone right away if the new date hits one.
    ///
    /// # Arguments
    /// - `game_id` - Game whose release date was just stored
    /// - `previous` - Release date stored before the update
    ///
    /// # Returns
    /// - `Ok(())`: Checks done; delivery failures were logged
    /// - `Err(AppError::NotFound)`: The game does not exist
    /// - `Err(AppError)`: The game registry could not be read
    pub async fn on_release_date_set(
        &self,
        game_id: i32,
        previous: Option<NaiveDate>,
    ) -> Result<(), AppError> {
        let _guard = self.run_lock.lock().await;

        let game = GameRepository::new(&self.db)
            .get_by_id(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))?;

        let Some(release_date) = game.release_date else {
            return Ok(());
        };

        if let Some(old_date) = previous.filter(|old| *old != release_date) {
            self.announce_date_change(&game, old_date, release_date).await;
        }

        let today = self.clock.today();

        let milestone = if release_date == today {
            Milestone::ReleasingToday
        } else if release_date == self.upcoming_date(today) {
            Milestone::ReleasingSoon
        } else {
            return Ok(());
        };

        if let Err(e) = self.announce(&game, milestone, release_date).await {
            tracing::error!(
                "Failed to announce {} for game {} ({}): {}",
                milestone.as_str(),
                game.id,
                game.name,
                e
            );
        }

        Ok(())
    }

    fn upcoming_date(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(self.upcoming_days))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Fills in missing release dates from the configured lookups, without notifying.
    async fn backfill(&self) -> Result<(), AppError> {
        if self.lookups.is_empty() {
            return Ok(());
        }

        let repo = GameRepository::new(&self.db);

        for game in repo.get_missing_release_date().await? {
            let release_date = match self.lookup_release_date(&game).await {
                Some(release_date) => release_date,
                None => continue,
            };

            match repo.set_release_date(game.id, release_date).await {
                Ok(_) => tracing::info!(
                    "Backfilled release date {} for game {} ({})",
                    release_date,
                    game.id,
                    game.name
                ),
                Err(e) => tracing::error!(
                    "Failed to store release date for game {} ({}): {}",
                    game.id,
                    game.name,
                    e
                ),
            }
        }

        Ok(())
    }

    /// Asks every lookup supporting one of the game's sources, first date wins.
    async fn lookup_release_date(&self, game: &Game) -> Option<NaiveDate> {
        for source in &game.sources {
            for lookup in self
                .lookups
                .iter()
                .filter(|lookup| lookup.supports(source.source_type))
            {
                match self.lookup(lookup.as_ref(), source).await {
                    Ok(Some(release_date)) => return Some(release_date),
                    Ok(None) => {}
                    Err(e) => tracing::warn!(
                        "Release date lookup failed for {} source '{}' of game {} ({}): {}",
                        source.source_type,
                        source.source_id,
                        game.id,
                        game.name,
                        e
                    ),
                }
            }
        }

        None
    }

    async fn lookup(
        &self,
        lookup: &dyn ReleaseDateLookup,
        source: &GameSource,
    ) -> Result<Option<NaiveDate>, FetchError> {
        tokio::time::timeout(
            self.lookup_timeout,
            lookup.lookup_release_date(&source.source_id),
        )
        .await
        .map_err(|_| FetchError::Timeout {
            source_type: source.source_type.to_string(),
            source_id: source.source_id.clone(),
            after: self.lookup_timeout,
        })?
    }

    async fn announce_releasing_on(
        &self,
        release_date: NaiveDate,
        milestone: Milestone,
    ) -> Result<(), AppError> {
        let games = GameRepository::new(&self.db)
            .get_releasing_on(release_date)
            .await?;

        for game in &games {
            if let Err(e) = self.announce(game, milestone, release_date).await {
                tracing::error!(
                    "Failed to announce {} for game {} ({}): {}",
                    milestone.as_str(),
                    game.id,
                    game.name,
                    e
                );
            }
        }

        Ok(())
    }

    /// Claims the milestone in the ledger and, if this call won the claim, sends it.
    async fn announce(
        &self,
        game: &Game,
        milestone: Milestone,
        release_date: NaiveDate,
    ) -> Result<(), AppError> {
        let claimed = ReleaseAnnouncementRepository::new(&self.db)
            .claim(game.id, milestone, release_date)
            .await?;

        if !claimed {
            tracing::debug!(
                "{} already announced for game {} ({}) on {}",
                milestone.as_str(),
                game.id,
                game.name,
                release_date
            );
            return Ok(());
        }

        let report = match milestone {
            Milestone::ReleasingToday => self.sink.notify_released_today(game).await?,
            Milestone::ReleasingSoon => self.sink.notify_releasing_soon(game, release_date).await?,
        };

        if report.is_failure() {
            tracing::warn!(
                "{} announcement of game {} ({}) reached no destination",
                milestone.as_str(),
                game.id,
                game.name
            );
        } else {
            tracing::info!(
                "Announced {} for game {} ({}) to {} destinations",
                milestone.as_str(),
                game.id,
                game.name,
                report.delivered
            );
        }

        Ok(())
    }

    async fn announce_date_change(&self, game: &Game, old_date: NaiveDate, new_date: NaiveDate) {
        match self
            .sink
            .notify_release_date_changed(game, old_date, new_date)
            .await
        {
            Ok(report) if report.is_failure() => tracing::warn!(
                "Release date change of game {} ({}) reached no destination",
                game.id,
                game.name
            ),
            Ok(_) => tracing::info!(
                "Announced release date change of game {} ({}) from {} to {}",
                game.id,
                game.name,
                old_date,
                new_date
            ),
            Err(e) => tracing::error!(
                "Failed to announce release date change of game {} ({}): {}",
                game.id,
                game.name,
                e
            ),
        }
    }
}
