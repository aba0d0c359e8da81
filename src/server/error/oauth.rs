use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

/// Failures of the browser-facing Discord login flow.
///
/// These never produce a JSON body: the browser is sent back to the landing page with a
/// stable `error` code in the query string, see [`OAuthError::code`]. Provider payloads
/// and configuration values only go to the server log.
#[derive(Error, Debug)]
pub enum OAuthError {
    #[error("DISCORD_CLIENT_ID is not set")]
    MissingClientId,

    #[error("DISCORD_CLIENT_ID must be a numeric Discord snowflake, got '{0}'")]
    InvalidClientId(String),

    #[error("DISCORD_CLIENT_SECRET is not set")]
    MissingCredentials,

    #[error("APP_URL has a duplicated protocol: '{0}'")]
    DuplicateProtocol(String),

    #[error("APP_URL contains a '...' placeholder: '{0}'")]
    PlaceholderUrl(String),

    #[error("APP_URL is not a valid URL '{url}': {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Discord redirected back without an authorization code.
    #[error("OAuth callback is missing the authorization code")]
    NoCode,

    /// The `state` parameter does not match the value issued at login.
    #[error("OAuth callback state does not match the login request")]
    InvalidState,

    /// The token endpoint rejected the code or answered with an unusable body.
    #[error("Discord token exchange failed: {0}")]
    TokenExchange(String),

    /// The token request itself or one of the profile/guild fetches failed.
    #[error("Discord authentication failed: {0}")]
    AuthFailed(String),

    /// An encrypted session cookie would exceed what browsers store, usually because the
    /// user belongs to many guilds.
    #[error("Session cookie '{cookie}' is {size} bytes for {guilds} guilds, over the {limit} byte limit")]
    SessionTooLarge {
        cookie: String,
        size: usize,
        limit: usize,
        guilds: usize,
    },
}

impl OAuthError {
    /// Machine-readable code placed in the `/?error=` redirect.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingClientId => "missing_client_id",
            Self::InvalidClientId(_) => "invalid_client_id",
            Self::MissingCredentials => "missing_credentials",
            Self::DuplicateProtocol(_) => "invalid_app_url_duplicate_protocol",
            Self::PlaceholderUrl(_) => "invalid_app_url_placeholder",
            Self::MalformedUrl { .. } => "invalid_app_url_format",
            Self::NoCode => "no_code",
            Self::InvalidState => "invalid_state",
            Self::TokenExchange(_) => "token_exchange_failed",
            Self::AuthFailed(_) | Self::SessionTooLarge { .. } => "auth_failed",
        }
    }

    /// Whether the error comes from deployment configuration rather than the user's request.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingClientId
                | Self::InvalidClientId(_)
                | Self::MissingCredentials
                | Self::DuplicateProtocol(_)
                | Self::PlaceholderUrl(_)
                | Self::MalformedUrl { .. }
        )
    }
}

/// Redirects the browser to the landing page with the error code.
impl IntoResponse for OAuthError {
    fn into_response(self) -> Response {
        match &self {
            Self::TokenExchange(_) | Self::AuthFailed(_) | Self::SessionTooLarge { .. } => {
                tracing::error!("{}", self)
            }
            err if err.is_configuration() => tracing::error!("{}", self),
            _ => tracing::warn!("{}", self),
        }

        Redirect::to(&format!("/?error={}", self.code())).into_response()
    }
}
