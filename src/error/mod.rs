//! Error types for the watcher engine.
//!
//! `AppError` is the top-level error that wraps every domain-specific error. Per-game and
//! per-source failures are logged where they happen and never escape a check pass; only
//! systemic failures (registry unreachable, scheduler failure, bad configuration) are
//! returned to the caller as an `AppError`.

pub mod config;
pub mod fetch;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, fetch::FetchError, internal::InternalError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or watcher start.
    ///
    /// Fatal: raised to the caller of `start()` or `Config::from_env()`.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Upstream fetch failed (network, timeout, unexpected payload).
    ///
    /// Transient: the source is skipped for this tick and retried on the next one.
    #[error(transparent)]
    FetchErr(#[from] FetchError),

    /// Malformed stored or fetched data (marker, date, Discord id).
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error from the registration flow.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
