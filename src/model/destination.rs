//! Delivery destinations subscribed to games.

use crate::error::internal::InternalError;

/// Where notifications for a guild are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationTarget {
    /// Bot posts into a channel.
    Channel(u64),
    /// Notifications are executed through a webhook.
    Webhook(String),
}

/// Per-guild delivery target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub id: i32,
    pub guild_id: u64,
    pub target: DestinationTarget,
}

impl Destination {
    /// Converts an entity model to a destination.
    ///
    /// A channel takes precedence over a webhook when both are stored.
    ///
    /// # Returns
    /// - `Ok(Destination)` - The converted destination
    /// - `Err(InternalError::ParseDiscordId)` - Stored guild or channel id is not a snowflake
    /// - `Err(InternalError::ZeroDiscordId)` - Stored guild or channel id is zero
    /// - `Err(InternalError::IncompleteDestination)` - Neither channel nor webhook stored
    pub fn from_entity(entity: entity::destination::Model) -> Result<Self, InternalError> {
        let guild_id = parse_snowflake(&entity.guild_id)?;

        let target = match (entity.channel_id, entity.webhook_url) {
            (Some(channel_id), _) => DestinationTarget::Channel(parse_snowflake(&channel_id)?),
            (None, Some(webhook_url)) => DestinationTarget::Webhook(webhook_url),
            (None, None) => {
                return Err(InternalError::IncompleteDestination {
                    guild_id: entity.guild_id,
                })
            }
        };

        Ok(Self {
            id: entity.id,
            guild_id,
            target,
        })
    }
}

/// Parameters for creating or replacing the destination of a guild.
#[derive(Debug, Clone)]
pub struct UpsertDestinationParam {
    pub guild_id: u64,
    pub channel_id: Option<u64>,
    pub webhook_url: Option<String>,
}

/// Parses a stored snowflake; serenity ids cannot hold zero.
fn parse_snowflake(value: &str) -> Result<u64, InternalError> {
    let id = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseDiscordId {
            value: value.to_string(),
            source: e,
        })?;

    if id == 0 {
        return Err(InternalError::ZeroDiscordId(value.to_string()));
    }

    Ok(id)
}
