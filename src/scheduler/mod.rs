//! Scheduling engine.
//!
//! `PollingWatcher` polls one source type at a fixed interval, `ReleaseScheduler` runs the
//! daily release passes, and `WatcherCoordinator` owns both on a shared `JobScheduler`.
//! Every job also runs once immediately on start, and no job ever overlaps itself.

pub mod clock;
pub mod coordinator;
pub mod release;
pub mod watcher;


use tokio::task::JoinHandle;
use tokio_cron_scheduler::JobScheduler;
use uuid::Uuid;

use crate::error::AppError;

/// A job registered with the scheduler together with its immediate first run.
struct ScheduledJob {
    job_id: Uuid,
    first_run: JoinHandle<()>,
}

impl ScheduledJob {
    /// Removes the job so no further run is scheduled, then waits for the first run if it
    /// is still going.
    async fn cancel(self, scheduler: &JobScheduler) -> Result<(), AppError> {
        scheduler.remove(&self.job_id).await?;

        if let Err(e) = self.first_run.await {
            tracing::error!("First run of job {} did not complete: {}", self.job_id, e);
        }

        Ok(())
    }
}
