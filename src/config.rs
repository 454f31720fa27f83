use std::{str::FromStr, time::Duration};

use crate::error::{config::ConfigError, AppError};

const STEAM_API_URL: &str = "https://api.steampowered.com";
const STEAM_STORE_URL: &str = "https://store.steampowered.com";

const DEFAULT_INTERNAL_CHECK_INTERVAL_SECS: u64 = 600;
const DEFAULT_EXTERNAL_CHECK_INTERVAL_SECS: u64 = 1800;
const DEFAULT_RELEASE_CHECK_CRON: &str = "0 0 0 * * *";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_RELEASE_UPCOMING_DAYS: u64 = 7;

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,

    /// Check interval of the official Steam announcements watcher.
    pub steam_internal_check_interval: Duration,
    /// Check interval of the external Steam press feed watcher.
    pub steam_external_check_interval: Duration,
    /// Six-field cron expression (UTC) of the daily release check.
    pub release_check_cron: String,
    /// Upper bound on a single upstream request.
    pub fetch_timeout: Duration,
    /// How many days ahead the "releasing soon" announcement fires.
    pub release_upcoming_days: u64,

    pub steam_api_url: String,
    pub steam_store_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            steam_internal_check_interval: Duration::from_secs(parsed_or(
                "STEAM_INTERNAL_CHECK_INTERVAL_SECS",
                DEFAULT_INTERNAL_CHECK_INTERVAL_SECS,
            )?),
            steam_external_check_interval: Duration::from_secs(parsed_or(
                "STEAM_EXTERNAL_CHECK_INTERVAL_SECS",
                DEFAULT_EXTERNAL_CHECK_INTERVAL_SECS,
            )?),
            release_check_cron: std::env::var("RELEASE_CHECK_CRON")
                .unwrap_or_else(|_| DEFAULT_RELEASE_CHECK_CRON.to_string()),
            fetch_timeout: Duration::from_secs(parsed_or(
                "FETCH_TIMEOUT_SECS",
                DEFAULT_FETCH_TIMEOUT_SECS,
            )?),
            release_upcoming_days: parsed_or(
                "RELEASE_UPCOMING_DAYS",
                DEFAULT_RELEASE_UPCOMING_DAYS,
            )?,
            steam_api_url: STEAM_API_URL.to_string(),
            steam_store_url: STEAM_STORE_URL.to_string(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional numeric variable, falling back to `default` when unset.
fn parsed_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}
