//! Errors reported by the backend client.

use thiserror::Error;

/// Failure of a backend call. Backend-reported messages are shown to the
/// user verbatim, so `Display` carries the raw message without decoration.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure reaching the backend.
    #[error("{0}")]
    Transport(String),

    /// The backend rejected the request.
    #[error("{0}")]
    Backend(String),

    /// The backend answered with something this client cannot decode.
    #[error("unexpected response from backend: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
