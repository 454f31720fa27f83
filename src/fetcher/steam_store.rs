//! Release date lookup backed by the Steam store `appdetails` endpoint.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

use crate::{error::fetch::FetchError, fetcher::ReleaseDateLookup, model::game::SourceType};

/// Date layouts the store renders depending on the storefront locale.
const STORE_DATE_FORMATS: [&str; 4] = ["%d %b, %Y", "%b %d, %Y", "%d %B, %Y", "%B %d, %Y"];

#[derive(Debug, Deserialize)]
struct AppDetailsEnvelope {
    success: bool,
    data: Option<AppDetails>,
}

#[derive(Debug, Deserialize)]
struct AppDetails {
    release_date: Option<StoreReleaseDate>,
}

#[derive(Debug, Deserialize)]
struct StoreReleaseDate {
    #[serde(default)]
    date: String,
}

pub struct SteamStoreLookup {
    client: reqwest::Client,
    base_url: String,
}

impl SteamStoreLookup {
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `base_url` - Steam store base URL, e.g. `https://store.steampowered.com`
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ReleaseDateLookup for SteamStoreLookup {
    fn supports(&self, source_type: SourceType) -> bool {
        matches!(source_type, SourceType::InternalFeed | SourceType::ExternalFeed)
    }

    async fn lookup_release_date(&self, source_id: &str) -> Result<Option<NaiveDate>, FetchError> {
        let url = format!("{}/api/appdetails", self.base_url.trim_end_matches('/'));

        let body: HashMap<String, AppDetailsEnvelope> = self
            .client
            .get(url)
            .query(&[("appids", source_id), ("cc", "us"), ("l", "english")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        release_date_from(source_id, body)
    }
}

fn release_date_from(
    app_id: &str,
    mut body: HashMap<String, AppDetailsEnvelope>,
) -> Result<Option<NaiveDate>, FetchError> {
    let envelope = body.remove(app_id).ok_or_else(|| {
        FetchError::UnexpectedPayload(format!("appdetails has no entry for app {}", app_id))
    })?;

    if !envelope.success {
        return Ok(None);
    }

    Ok(envelope
        .data
        .and_then(|data| data.release_date)
        .and_then(|release| parse_store_date(&release.date)))
}

/// Parses a day-precision store date; quarters, years, "Coming soon" and "TBA" yield `None`.
pub fn parse_store_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    STORE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_day_first_and_month_first_layouts() {
        assert_eq!(parse_store_date("10 Mar, 2025"), Some(date(2025, 3, 10)));
        assert_eq!(parse_store_date("Mar 10, 2025"), Some(date(2025, 3, 10)));
        assert_eq!(parse_store_date("4 September, 2025"), Some(date(2025, 9, 4)));
    }

    #[test]
    fn ignores_imprecise_dates() {
        assert_eq!(parse_store_date("Coming soon"), None);
        assert_eq!(parse_store_date("Q2 2025"), None);
        assert_eq!(parse_store_date("2025"), None);
        assert_eq!(parse_store_date("To be announced"), None);
        assert_eq!(parse_store_date(""), None);
    }

    #[test]
    fn reads_release_date_from_appdetails() {
        let body: HashMap<String, AppDetailsEnvelope> = serde_json::from_str(
            r#"{"1145360": {"success": true, "data": {"name": "Hades",
                "release_date": {"coming_soon": false, "date": "17 Sep, 2020"}}}}"#,
        )
        .unwrap();

        let release_date = release_date_from("1145360", body).unwrap();

        assert_eq!(release_date, Some(date(2020, 9, 17)));
    }

    #[test]
    fn unsuccessful_lookup_has_no_date() {
        let body: HashMap<String, AppDetailsEnvelope> =
            serde_json::from_str(r#"{"42": {"success": false}}"#).unwrap();

        assert_eq!(release_date_from("42", body).unwrap(), None);
    }

    #[test]
    fn missing_app_entry_is_unexpected_payload() {
        let body: HashMap<String, AppDetailsEnvelope> = serde_json::from_str("{}").unwrap();

        assert!(matches!(
            release_date_from("42", body),
            Err(FetchError::UnexpectedPayload(_))
        ));
    }
}
