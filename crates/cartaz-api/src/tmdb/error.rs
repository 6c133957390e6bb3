//! TMDB client error type.

use thiserror::Error;

/// Errors returned by the TMDB client.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbError {
    /// Network-level failure (connect, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API.
    #[error("TMDB API error (HTTP {code}): {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Raw response body.
        body: String,
    },

    /// Response body could not be decoded.
    #[error("failed to decode TMDB response at `{path}`: {source}")]
    Json {
        /// JSON path where decoding failed.
        path: String,
        /// Underlying serde error.
        source: serde_json::Error,
    },

    /// Client was built with incomplete or invalid configuration.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl TmdbError {
    /// HTTP status code of the upstream response, when one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            Self::Http(_) | Self::Json { .. } | Self::Config(_) => None,
        }
    }
}
