//! Upstream fetchers.
//!
//! The engine only knows two seams: `SourceFetcher`, which returns the latest news items
//! of a source, and `ReleaseDateLookup`, which resolves an authoritative release date for
//! the backfill pass. One implementation exists per upstream; watchers are tagged by the
//! source type of the fetcher they are given.

pub mod steam;
pub mod steam_store;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::fetch::FetchError,
    model::{game::SourceType, news::NewsItem},
};

#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Source type this fetcher serves.
    fn source_type(&self) -> SourceType;

    /// One-time setup before the first fetch (sessions, warm-up requests).
    async fn init(&self) -> Result<(), FetchError> {
        Ok(())
    }

    /// Returns the latest items of the source, most recent first, or an empty list when
    /// the source has nothing to offer right now.
    async fn fetch_latest(&self, source_id: &str) -> Result<Vec<NewsItem>, FetchError>;
}

#[async_trait]
pub trait ReleaseDateLookup: Send + Sync {
    /// Whether sources of this type carry an identifier the lookup understands.
    fn supports(&self, source_type: SourceType) -> bool;

    /// Resolves the release date of a source, `None` when the upstream has no
    /// day-precision date yet.
    async fn lookup_release_date(&self, source_id: &str) -> Result<Option<NaiveDate>, FetchError>;
}
