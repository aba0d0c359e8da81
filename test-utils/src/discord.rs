//! Discord payload fixtures and a mock OAuth provider.
//!
//! `MockDiscord` serves the token endpoint and the two bearer-authenticated user endpoints
//! the dashboard calls during login. It listens on an ephemeral local port so tests can point
//! the application's provider URLs at it.
//!
//! ```rust,ignore
//! let discord = MockDiscordBuilder::new()
//!     .guilds(json!([guild_json("1", "Support Hub", "32")]))
//!     .start()
//!     .await?;
//!
//! config.discord_token_url = discord.token_url();
//! config.discord_api_url = discord.api_url();
//! ```

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, task::JoinHandle};

use crate::error::TestError;

/// Access token issued by the mock token endpoint by default.
pub const MOCK_ACCESS_TOKEN: &str = "mock-access-token";

/// Builds a Discord `/users/@me` payload.
pub fn user_json(id: &str, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "discriminator": "0",
        "avatar": null,
        "global_name": username,
        "mfa_enabled": false,
        "locale": "en-US"
    })
}

/// Builds one entry of a Discord `/users/@me/guilds` payload.
///
/// `permissions` is the decimal permission bitmask as Discord sends it.
pub fn guild_json(id: &str, name: &str, permissions: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "icon": null,
        "owner": false,
        "permissions": permissions,
        "features": []
    })
}

#[derive(Clone)]
struct MockState {
    token_status: StatusCode,
    token_body: Value,
    user_status: StatusCode,
    user: Value,
    guilds: Value,
    token_requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// Configures the responses of a `MockDiscord` before it starts.
pub struct MockDiscordBuilder {
    state: MockState,
}

impl Default for MockDiscordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDiscordBuilder {
    /// Creates a builder whose provider accepts any code.
    ///
    /// Defaults:
    /// - token: `MOCK_ACCESS_TOKEN`, bearer, expires in 7 days
    /// - user: `user_json("100000000000000001", "ticket_admin")`
    /// - guilds: empty
    pub fn new() -> Self {
        Self {
            state: MockState {
                token_status: StatusCode::OK,
                token_body: json!({
                    "access_token": MOCK_ACCESS_TOKEN,
                    "token_type": "Bearer",
                    "expires_in": 604800,
                    "refresh_token": "mock-refresh-token",
                    "scope": "identify guilds"
                }),
                user_status: StatusCode::OK,
                user: user_json("100000000000000001", "ticket_admin"),
                guilds: json!([]),
                token_requests: Arc::new(Mutex::new(Vec::new())),
            },
        }
    }

    pub fn user(mut self, user: Value) -> Self {
        self.state.user = user;
        self
    }

    pub fn guilds(mut self, guilds: Value) -> Self {
        self.state.guilds = guilds;
        self
    }

    /// Overrides the status and body returned by the token endpoint.
    pub fn token_response(mut self, status: u16, body: Value) -> Self {
        self.state.token_status =
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.state.token_body = body;
        self
    }

    /// Overrides the status of the `/users/@me` endpoint.
    pub fn user_status(mut self, status: u16) -> Self {
        self.state.user_status =
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self
    }

    /// Binds an ephemeral local port and serves the mock provider in the background.
    ///
    /// # Returns
    /// - `Ok(MockDiscord)` - Running provider, stopped when dropped
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn start(self) -> Result<MockDiscord, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let token_requests = self.state.token_requests.clone();

        let router = Router::new()
            .route("/api/oauth2/token", post(token))
            .route("/api/users/@me", get(current_user))
            .route("/api/users/@me/guilds", get(current_user_guilds))
            .with_state(self.state);

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(MockDiscord {
            addr,
            token_requests,
            handle,
        })
    }
}

/// A running mock Discord OAuth provider.
pub struct MockDiscord {
    addr: SocketAddr,
    token_requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
    handle: JoinHandle<()>,
}

impl MockDiscord {
    /// URL of the mock token endpoint.
    pub fn token_url(&self) -> String {
        format!("http://{}/api/oauth2/token", self.addr)
    }

    /// Base URL of the mock REST API, without trailing slash.
    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Form bodies received by the token endpoint, in arrival order.
    pub fn token_requests(&self) -> Vec<HashMap<String, String>> {
        self.token_requests.lock().unwrap().clone()
    }
}

impl Drop for MockDiscord {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn token(
    State(state): State<MockState>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    state.token_requests.lock().unwrap().push(form);

    (state.token_status, Json(state.token_body)).into_response()
}

async fn current_user(State(state): State<MockState>, headers: HeaderMap) -> Response {
    if !is_authorized(&headers) {
        return unauthorized();
    }

    (state.user_status, Json(state.user)).into_response()
}

async fn current_user_guilds(State(state): State<MockState>, headers: HeaderMap) -> Response {
    if !is_authorized(&headers) {
        return unauthorized();
    }

    (StatusCode::OK, Json(state.guilds)).into_response()
}

fn is_authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {}", MOCK_ACCESS_TOKEN))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "401: Unauthorized", "code": 0 })),
    )
        .into_response()
}
