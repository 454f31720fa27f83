//! Steam news fetcher backed by `ISteamNews/GetNewsForApp`.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat};
use serde::Deserialize;

use crate::{
    error::fetch::FetchError,
    fetcher::SourceFetcher,
    model::{game::SourceType, news::NewsItem},
};

/// Feed name Steam uses for official community announcements.
const COMMUNITY_ANNOUNCEMENTS: &str = "steam_community_announcements";

/// Which part of an app's Steam news a fetcher follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteamFeed {
    /// Official announcements posted by the developer on Steam.
    Internal,
    /// Press articles aggregated by Steam from external sites.
    External,
}

impl SteamFeed {
    fn source_type(&self) -> SourceType {
        match self {
            Self::Internal => SourceType::InternalFeed,
            Self::External => SourceType::ExternalFeed,
        }
    }

    fn accepts(&self, item: &SteamNewsItem) -> bool {
        let is_announcement = item.feedname == COMMUNITY_ANNOUNCEMENTS;
        match self {
            Self::Internal => is_announcement,
            Self::External => !is_announcement,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GetNewsResponse {
    appnews: AppNews,
}

#[derive(Debug, Deserialize)]
struct AppNews {
    #[serde(default)]
    newsitems: Vec<SteamNewsItem>,
}

#[derive(Debug, Deserialize)]
struct SteamNewsItem {
    gid: String,
    title: String,
    url: String,
    #[serde(default)]
    contents: String,
    #[serde(default)]
    feedname: String,
    /// Unix seconds.
    date: i64,
}

pub struct SteamNewsFetcher {
    client: reqwest::Client,
    base_url: String,
    feed: SteamFeed,
    count: u32,
}

impl SteamNewsFetcher {
    /// Creates a fetcher following `feed`.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client (timeouts configured at startup)
    /// - `base_url` - Steam Web API base URL, e.g. `https://api.steampowered.com`
    /// - `feed` - Which news feed to follow
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, feed: SteamFeed) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            feed,
            count: 10,
        }
    }

    fn request_url(&self, app_id: &str) -> Result<url::Url, FetchError> {
        let mut url = url::Url::parse(&format!(
            "{}/ISteamNews/GetNewsForApp/v2/",
            self.base_url.trim_end_matches('/')
        ))
        .map_err(|e| FetchError::UnexpectedPayload(format!("invalid Steam API URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("appid", app_id)
            .append_pair("count", &self.count.to_string())
            .append_pair("maxlength", "0");

        if self.feed == SteamFeed::Internal {
            url.query_pairs_mut()
                .append_pair("feeds", COMMUNITY_ANNOUNCEMENTS);
        }

        Ok(url)
    }
}

#[async_trait]
impl SourceFetcher for SteamNewsFetcher {
    fn source_type(&self) -> SourceType {
        self.feed.source_type()
    }

    async fn fetch_latest(&self, source_id: &str) -> Result<Vec<NewsItem>, FetchError> {
        let response: GetNewsResponse = self
            .client
            .get(self.request_url(source_id)?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(news_items(self.feed, response))
    }
}

/// Maps a Steam response to news items of `feed`, most recent first.
fn news_items(feed: SteamFeed, response: GetNewsResponse) -> Vec<NewsItem> {
    let mut items: Vec<(i64, NewsItem)> = response
        .appnews
        .newsitems
        .into_iter()
        .filter(|item| feed.accepts(item))
        .filter_map(|item| {
            let Some(date) = DateTime::from_timestamp(item.date, 0) else {
                tracing::warn!("Steam news item {} has out of range date {}", item.gid, item.date);
                return None;
            };

            Some((
                item.date,
                NewsItem {
                    id: item.gid,
                    date: date.to_rfc3339_opts(SecondsFormat::Secs, true),
                    title: item.title,
                    url: item.url,
                    content: item.contents,
                },
            ))
        })
        .collect();

    items.sort_by(|a, b| b.0.cmp(&a.0));
    items.into_iter().map(|(_, item)| item).collect()
}
