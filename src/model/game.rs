//! Game (tracked entity) and source domain models.

use chrono::{DateTime, NaiveDate, Utc};
use std::{fmt, str::FromStr};

use crate::error::internal::InternalError;

/// Kind of upstream feed attached to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// Official Steam community announcements.
    InternalFeed,
    /// External press feeds curated by Steam news.
    ExternalFeed,
    /// Social media timeline of the developer or publisher.
    SocialTimeline,
}

impl SourceType {
    pub const ALL: [SourceType; 3] = [
        SourceType::InternalFeed,
        SourceType::ExternalFeed,
        SourceType::SocialTimeline,
    ];

    /// Stable identifier stored in the `source_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InternalFeed => "internal-feed",
            Self::ExternalFeed => "external-feed",
            Self::SocialTimeline => "social-timeline",
        }
    }

    /// Human readable label used in notification footers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InternalFeed => "Steam News",
            Self::ExternalFeed => "Steam External News",
            Self::SocialTimeline => "Social Timeline",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InternalError::UnknownSourceType(s.to_string()))
    }
}

/// One upstream feed attached to a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSource {
    pub source_type: SourceType,
    /// Upstream identifier (Steam app id, handle, ...), opaque and scoped to `source_type`.
    pub source_id: String,
    /// Marker of the most recent item already notified, `None` until the first check.
    pub last_update: Option<String>,
}

impl GameSource {
    pub fn from_entity(entity: entity::game_source::Model) -> Result<Self, InternalError> {
        Ok(Self {
            source_type: entity.source_type.parse()?,
            source_id: entity.source_id,
            last_update: entity.last_update,
        })
    }
}

/// A tracked game with its sources and optional release date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i32,
    pub name: String,
    /// Sources in registration order.
    pub sources: Vec<GameSource>,
    /// Calendar release date, `None` while unknown or TBA.
    pub release_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Converts a game row and its source rows into the domain model.
    ///
    /// Source rows carrying an unknown source type are dropped with a warning so a single
    /// bad row cannot hide the rest of the game from the watchers.
    pub fn from_entity(
        entity: entity::game::Model,
        sources: Vec<entity::game_source::Model>,
    ) -> Self {
        let game_id = entity.id;
        let sources = sources
            .into_iter()
            .filter_map(|source| match GameSource::from_entity(source) {
                Ok(source) => Some(source),
                Err(e) => {
                    tracing::warn!("Skipping source of game {}: {}", game_id, e);
                    None
                }
            })
            .collect();

        Self {
            id: entity.id,
            name: entity.name,
            sources,
            release_date: entity.release_date,
            created_at: entity.created_at,
        }
    }

    pub fn source(&self, source_type: SourceType) -> Option<&GameSource> {
        self.sources.iter().find(|s| s.source_type == source_type)
    }
}

/// Source of a game as given by the registration flow, before any check has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceParam {
    pub source_type: SourceType,
    pub source_id: String,
}

/// Parameters for registering a new game.
#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub name: String,
    pub sources: Vec<SourceParam>,
    pub release_date: Option<NaiveDate>,
}

/// Normalizes a game name for uniqueness checks: whitespace stripped, lowercased.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
