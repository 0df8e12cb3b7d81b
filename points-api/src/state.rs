//! Application state for the API server

use points_core::ScoreStore;
use std::sync::Arc;

/// API server state
///
/// The store is constructed once at startup and shared by reference;
/// handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    /// Score storage shared by all request handlers
    pub store: Arc<dyn ScoreStore>,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create new app state around a score store
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self {
            store,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}
