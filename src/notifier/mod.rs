//! Notification sink.
//!
//! The scheduler hands finished events to a `NotificationSink`; the sink resolves who is
//! subscribed and delivers. Per-destination failures are counted in the returned
//! `DeliveryReport` and never raised, so only systemic failures surface as errors.

pub mod builder;
pub mod discord;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::AppError,
    model::{
        game::{Game, SourceType},
        news::NewsItem,
    },
};

/// Outcome of delivering one notification to every destination of a game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: usize,
    pub failed: usize,
}

impl DeliveryReport {
    /// True when there were destinations and none of them received the notification.
    pub fn is_failure(&self) -> bool {
        self.delivered == 0 && self.failed > 0
    }
}

#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify_update(
        &self,
        game: &Game,
        source_type: SourceType,
        item: &NewsItem,
    ) -> Result<DeliveryReport, AppError>;

    async fn notify_released_today(&self, game: &Game) -> Result<DeliveryReport, AppError>;

    async fn notify_releasing_soon(
        &self,
        game: &Game,
        release_date: NaiveDate,
    ) -> Result<DeliveryReport, AppError>;

    async fn notify_release_date_changed(
        &self,
        game: &Game,
        old_date: NaiveDate,
        new_date: NaiveDate,
    ) -> Result<DeliveryReport, AppError>;
}
