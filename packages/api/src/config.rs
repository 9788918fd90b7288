//! Connection settings for the managed backend.

use serde::{Deserialize, Serialize};

/// Where the backend lives and how this client identifies itself to it.
///
/// The API key is a project credential, not a user secret; it is sent with
/// every request the way the backend's own client libraries do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Project API key.
    pub api_key: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Read `MINIBLOG_BACKEND_URL` and `MINIBLOG_API_KEY` from the
    /// environment. A `.env` file is honoured on native builds.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        Self {
            base_url: std::env::var("MINIBLOG_BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            api_key: std::env::var("MINIBLOG_API_KEY").unwrap_or_default(),
        }
    }
}
