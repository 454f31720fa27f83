use std::{sync::Arc, time::Duration};

use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::AppError,
    model::game::{CreateGameParam, SourceParam, SourceType},
    scheduler::{
        coordinator::WatcherCoordinator,
        release::ReleaseScheduler,
        test::fakes::{date, news, FixedClock, Notification, RecordingSink, Script, ScriptedFetcher},
        watcher::PollingWatcher,
    },
};


const BASE: i64 = 1_700_000_000_000;

struct Harness {
    fetcher: Arc<ScriptedFetcher>,
    sink: Arc<RecordingSink>,
    coordinator: WatcherCoordinator,
}

/// Coordinator with an internal-feed watcher and a release scheduler pinned to
/// 2025-03-10; nothing is scheduled.
async fn harness(db: &DatabaseConnection) -> Harness {
    let fetcher = Arc::new(ScriptedFetcher::new(SourceType::InternalFeed));
    let sink = Arc::new(RecordingSink::default());

    let release = ReleaseScheduler::new(
        db.clone(),
        sink.clone(),
        Arc::new(FixedClock::new(date(2025, 3, 10))),
    );
    let coordinator = WatcherCoordinator::new(Arc::new(release)).await.unwrap();
    coordinator
        .add_watcher(PollingWatcher::new(
            db.clone(),
            fetcher.clone(),
            sink.clone(),
            Duration::from_secs(600),
        ))
        .await
        .unwrap();

    Harness {
        fetcher,
        sink,
        coordinator,
    }
}

fn source(source_type: SourceType, source_id: &str) -> SourceParam {
    SourceParam {
        source_type,
        source_id: source_id.to_string(),
    }
}
