//! Arcjet API client error types.

use thiserror::Error;

/// Errors that can occur while talking to the Arcjet API.
///
/// These are logged by the client and never surfaced to tool callers.
#[derive(Debug, Error)]
pub enum ArcjetError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// The request URL could not be built from the configured base.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Network or transport failure.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("HTTP error! status: {status} ({url})")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ArcjetError {
    /// Create a client construction error.
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client(msg.into())
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}
