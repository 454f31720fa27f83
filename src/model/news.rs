//! Fetched news items and the update markers derived from them.

use chrono::DateTime;
use std::{fmt, str::FromStr};

use crate::error::internal::InternalError;

/// A single item returned by a source fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    /// Upstream item identifier.
    pub id: String,
    /// Publication instant as an RFC 3339 string.
    pub date: String,
    pub title: String,
    pub url: String,
    pub content: String,
}

/// Position of a news item in its source's timeline.
///
/// Stored as the decimal string of the publication instant in epoch milliseconds and
/// compared numerically, so a marker never regresses when a feed returns older items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Marker(i64);

impl Marker {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Derives the marker of an item from its RFC 3339 publication date.
    pub fn from_news_date(date: &str) -> Result<Self, InternalError> {
        let parsed =
            DateTime::parse_from_rfc3339(date).map_err(|e| InternalError::InvalidNewsDate {
                value: date.to_string(),
                source: e,
            })?;

        Ok(Self(parsed.timestamp_millis()))
    }

    pub fn millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Marker {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| InternalError::InvalidMarker {
                value: s.to_string(),
                source: e,
            })
    }
}

/// Picks the most recent item of a fetch by marker, regardless of list order.
///
/// Items whose date cannot be parsed are logged and ignored.
pub fn latest_item(items: &[NewsItem]) -> Option<(Marker, &NewsItem)> {
    items
        .iter()
        .filter_map(|item| match Marker::from_news_date(&item.date) {
            Ok(marker) => Some((marker, item)),
            Err(e) => {
                tracing::warn!("Ignoring news item {}: {}", item.id, e);
                None
            }
        })
        .max_by_key(|(marker, _)| *marker)
}
