//! Game update watcher and release announcement engine.
//!
//! Tracks games, polls their news sources for fresh updates and announces release
//! milestones to the Discord guilds subscribed to each game.
//!
//! # Architecture
//!
//! - **Scheduler** (`scheduler/`) - Polling watchers, the daily release scheduler and the
//!   coordinator that owns them
//! - **Fetcher** (`fetcher/`) - Upstream news and release date sources (Steam)
//! - **Notifier** (`notifier/`) - Notification sink and its Discord implementation
//! - **Service Layer** (`service/`) - Registration flow that triggers on-demand checks
//! - **Data Layer** (`data/`) - Game registry, marker store and announcement ledger
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database, HTTP client and logging initialization

pub mod config;
pub mod data;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod notifier;
pub mod scheduler;
pub mod service;
pub mod startup;
