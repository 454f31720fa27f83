//! Discord embed builders for game notifications.
//!
//! Shared by every notification kind so that colors, footers and timestamps stay
//! consistent across update and release announcements.

use chrono::{NaiveDate, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    error::internal::InternalError,
    model::{
        game::{Game, SourceType},
        news::NewsItem,
        release::DateChange,
    },
};

/// Discord caps embed descriptions at 4096 characters.
const MAX_DESCRIPTION_CHARS: usize = 4096;

const UPDATE_COLOR: u32 = 0x1b2838;
const RELEASED_COLOR: u32 = 0x2ecc71;
const RELEASING_SOON_COLOR: u32 = 0x3498db;
const DATE_CHANGED_COLOR: u32 = 0xf39c12;

/// Builds the embed announcing a new news item.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed titled with the item and linking to it
/// - `Err(InternalError::InvalidDiscordTimestamp)` - Current time out of Discord's range
pub fn update_embed(
    game: &Game,
    source_type: SourceType,
    item: &NewsItem,
) -> Result<CreateEmbed, InternalError> {
    let mut embed = CreateEmbed::new()
        .title(&item.title)
        .color(UPDATE_COLOR)
        .author(serenity::all::CreateEmbedAuthor::new(&game.name))
        .footer(CreateEmbedFooter::new(source_type.label()))
        .timestamp(now_timestamp()?);

    if !item.url.is_empty() {
        embed = embed.url(&item.url);
    }

    let content = truncate_description(item.content.trim());
    if !content.is_empty() {
        embed = embed.description(content);
    }

    Ok(embed)
}

/// Builds the embed announcing that a game releases today.
pub fn released_today_embed(game: &Game) -> Result<CreateEmbed, InternalError> {
    Ok(CreateEmbed::new()
        .title(format!(".:{} is out now:.", game.name))
        .description(format!("**{}** releases today!", game.name))
        .color(RELEASED_COLOR)
        .timestamp(now_timestamp()?))
}

/// Builds the embed announcing an upcoming release.
pub fn releasing_soon_embed(
    game: &Game,
    release_date: NaiveDate,
) -> Result<CreateEmbed, InternalError> {
    Ok(CreateEmbed::new()
        .title(format!(".:{} releases soon:.", game.name))
        .description(format!(
            "**{}** releases on {} ({}).",
            game.name,
            release_date.format("%Y-%m-%d"),
            discord_relative_date(release_date),
        ))
        .color(RELEASING_SOON_COLOR)
        .timestamp(now_timestamp()?))
}

/// Builds the embed announcing a moved release date.
pub fn release_date_changed_embed(
    game: &Game,
    old_date: NaiveDate,
    new_date: NaiveDate,
) -> Result<CreateEmbed, InternalError> {
    Ok(CreateEmbed::new()
        .title(format!(".:{} release date changed:.", game.name))
        .description(release_date_change_wording(&game.name, old_date, new_date))
        .field("Previous date", old_date.format("%Y-%m-%d").to_string(), true)
        .field("New date", new_date.format("%Y-%m-%d").to_string(), true)
        .color(DATE_CHANGED_COLOR)
        .timestamp(now_timestamp()?))
}

/// Sentence describing a release date change, worded by its direction.
pub fn release_date_change_wording(name: &str, old_date: NaiveDate, new_date: NaiveDate) -> String {
    match DateChange::between(old_date, new_date) {
        Some(DateChange::Delayed) => format!(
            "**{}** has been delayed from {} to {}.",
            name,
            old_date.format("%Y-%m-%d"),
            new_date.format("%Y-%m-%d")
        ),
        Some(DateChange::MovedForward) => format!(
            "Good news: **{}** has been moved forward from {} to {}.",
            name,
            old_date.format("%Y-%m-%d"),
            new_date.format("%Y-%m-%d")
        ),
        None => format!(
            "**{}** still releases on {}.",
            name,
            new_date.format("%Y-%m-%d")
        ),
    }
}

/// Truncates to Discord's description limit on a character boundary.
fn truncate_description(content: &str) -> String {
    if content.chars().count() <= MAX_DESCRIPTION_CHARS {
        return content.to_string();
    }

    let mut truncated: String = content.chars().take(MAX_DESCRIPTION_CHARS - 1).collect();
    truncated.push('…');
    truncated
}

/// Discord relative timestamp markup for midnight UTC of `date`.
fn discord_relative_date(date: NaiveDate) -> String {
    let seconds = date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp();
    format!("<t:{}:R>", seconds)
}

fn now_timestamp() -> Result<Timestamp, InternalError> {
    let now = Utc::now();
    Timestamp::from_unix_timestamp(now.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: now.timestamp(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game {
            id: 1,
            name: "Nova".to_string(),
            sources: Vec::new(),
            release_date: None,
            created_at: Utc::now(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn words_delay_and_move_forward_differently() {
        let delayed = release_date_change_wording("Nova", date(2025, 3, 10), date(2025, 4, 1));
        let forward = release_date_change_wording("Nova", date(2025, 3, 10), date(2025, 3, 1));

        assert!(delayed.contains("delayed from 2025-03-10 to 2025-04-01"));
        assert!(forward.contains("moved forward from 2025-03-10 to 2025-03-01"));
    }

    #[test]
    fn truncates_long_content_to_discord_limit() {
        let content = "a".repeat(MAX_DESCRIPTION_CHARS + 50);

        let truncated = truncate_description(&content);

        assert_eq!(truncated.chars().count(), MAX_DESCRIPTION_CHARS);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn keeps_short_content_untouched() {
        assert_eq!(truncate_description("Patch notes"), "Patch notes");
    }

    #[test]
    fn update_embed_links_item_and_names_source() {
        let item = NewsItem {
            id: "1".to_string(),
            date: "2025-03-10T00:00:00Z".to_string(),
            title: "Patch 1.2".to_string(),
            url: "https://example.com/patch".to_string(),
            content: "Fixes".to_string(),
        };

        let embed = update_embed(&game(), SourceType::InternalFeed, &item).unwrap();
        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(json["title"], "Patch 1.2");
        assert_eq!(json["url"], "https://example.com/patch");
        assert_eq!(json["description"], "Fixes");
        assert_eq!(json["footer"]["text"], "Steam News");
        assert_eq!(json["author"]["name"], "Nova");
    }

    #[test]
    fn releasing_soon_embed_mentions_date() {
        let embed = releasing_soon_embed(&game(), date(2025, 3, 17)).unwrap();
        let json = serde_json::to_value(&embed).unwrap();

        let description = json["description"].as_str().unwrap();
        assert!(description.contains("2025-03-17"));
        assert!(description.contains("<t:1742169600:R>"));
    }
}
