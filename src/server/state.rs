//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through Axum's
//! state extraction. Every field is cheap to clone: the database pool and the reqwest
//! client are reference counted internally and the configuration sits behind an `Arc`.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sea_orm::DatabaseConnection;

use crate::server::{config::Config, middleware::session::SessionCookies};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool of the config store.
    pub db: DatabaseConnection,

    /// HTTP client for Discord API requests.
    ///
    /// Configured without redirect following so provider responses are taken as-is.
    pub http_client: reqwest::Client,

    pub config: Arc<Config>,

    /// Cookie attributes for sessions and OAuth state.
    pub session_cookies: SessionCookies,

    /// Key encrypting and authenticating private cookies, derived from `SESSION_SECRET`.
    pub cookie_key: Key,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for Discord requests
    /// - `config` - Application configuration
    /// - `cookie_key` - Private cookie key
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        config: Config,
        cookie_key: Key,
    ) -> Self {
        Self {
            db,
            http_client,
            session_cookies: SessionCookies::new(config.production),
            config: Arc::new(config),
            cookie_key,
        }
    }
}

/// Lets `PrivateCookieJar` extract its key from the state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
