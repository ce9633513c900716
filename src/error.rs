//! Error types for the doccano client
//!
//! Distinguishes transport failures, HTTP error statuses, missing resources,
//! and undecodable bodies so callers can tell "record absent" from
//! "record malformed".

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by client operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network-level failure reported by the HTTP client
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered 404 for a singular resource path
    #[error("resource not found: {url}")]
    NotFound { url: String },

    /// The service answered with a non-success status other than 404
    #[error("API request failed with status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not JSON or did not match the expected shape
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A base or cursor URL could not be parsed
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A record was passed where an id is required, but it has none yet
    #[error("example has no id; persist it before referencing it by record")]
    MissingId,
}

impl Error {
    /// True for the not-found failure kind
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
