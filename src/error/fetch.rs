use std::time::Duration;

use thiserror::Error;

/// Failures while fetching news or release metadata from an upstream source.
///
/// All variants are transient from the engine's point of view: the affected source is
/// skipped for the current tick and its marker is left untouched.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP transport or status error.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Upstream did not answer within the fetch timeout.
    #[error("Fetching {source_type} source '{source_id}' timed out after {after:?}")]
    Timeout {
        /// Source type label
        source_type: String,
        /// Upstream identifier being fetched
        source_id: String,
        /// Configured timeout that elapsed
        after: Duration,
    },

    /// Upstream answered with a body that does not match the expected shape.
    #[error("Unexpected payload from upstream: {0}")]
    UnexpectedPayload(String),
}
