use std::num::ParseIntError;
use thiserror::Error;

/// Malformed data found in storage or in fetched items.
///
/// These are data errors scoped to a single game or source: logged with context and
/// never allowed to abort a batch.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored update marker is not a decimal millisecond timestamp.
    #[error("Invalid update marker '{value}': {source}")]
    InvalidMarker {
        /// The stored marker value
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// News item date is not an RFC 3339 timestamp.
    #[error("Invalid news item date '{value}': {source}")]
    InvalidNewsDate {
        /// The date string carried by the item
        value: String,
        /// The underlying parse error
        #[source]
        source: chrono::ParseError,
    },

    /// Stored source type does not name a known source.
    #[error("Unknown source type '{0}'")]
    UnknownSourceType(String),

    /// Failure to parse a Discord snowflake from its stored string.
    #[error("Failed to parse Discord ID from String '{value}': {source}")]
    ParseDiscordId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Stored Discord ID is zero, which Discord never issues.
    #[error("Discord ID '{0}' is zero")]
    ZeroDiscordId(String),

    /// Destination row has neither a channel nor a webhook.
    #[error("Destination for guild {guild_id} has neither a channel nor a webhook")]
    IncompleteDestination {
        /// Guild owning the destination
        guild_id: String,
    },

    /// Failure to convert Unix timestamp to Discord timestamp
    ///
    /// Occurs when a valid Unix timestamp cannot be converted to Discord's
    /// timestamp format, typically due to timestamp being out of range.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },
}
