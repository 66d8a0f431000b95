// crates/client/src/config.rs
//! Client configuration.

use std::time::Duration;

/// Where and how to reach the backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:8000/api/v1`. A trailing slash is
    /// tolerated and stripped.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("FINVIEW_API_BASE")
                .unwrap_or_else(|_| "http://localhost:8000/api/v1".to_string()),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
