//! OAuth2 login with Discord
//!
//! The client is assembled per request from `Config` because the Discord credentials are
//! optional at startup: a deployment without them still serves the dashboard and reports
//! the problem through the login error codes.

use oauth2::{
    basic::BasicClient, AuthType, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
    RedirectUrl, TokenUrl,
};
use url::Url;

use crate::server::{config::Config, error::oauth::OAuthError, util::parse::is_snowflake};

pub mod callback;
pub mod diagnostics;
pub mod login;

/// Path of the callback route, appended to the public base URL.
pub const CALLBACK_PATH: &str = "/auth/callback";

/// OAuth2 scopes requested from Discord.
pub const SCOPES: [&str; 2] = ["identify", "guilds"];

type DiscordClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

pub struct DiscordAuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub config: &'a Config,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Validated `DISCORD_CLIENT_ID`.
    fn client_id(&self) -> Result<&'a str, OAuthError> {
        let client_id = self
            .config
            .discord_client_id
            .as_deref()
            .ok_or(OAuthError::MissingClientId)?;

        if !is_snowflake(client_id) {
            return Err(OAuthError::InvalidClientId(client_id.to_string()));
        }

        Ok(client_id)
    }

    /// Callback URL registered with Discord, derived from `APP_URL`.
    fn redirect_uri(&self) -> Result<String, OAuthError> {
        let base = validate_app_url(&self.config.app_url)?;
        Ok(format!("{}{}", base, CALLBACK_PATH))
    }

    fn oauth_client(&self, client_secret: Option<&str>) -> Result<DiscordClient, OAuthError> {
        let client_id = self.client_id()?;
        let redirect_uri = self.redirect_uri()?;

        let auth_url = AuthUrl::new(self.config.discord_auth_url.clone())
            .map_err(|err| provider_url_error(&self.config.discord_auth_url, err))?;
        let token_url = TokenUrl::new(self.config.discord_token_url.clone())
            .map_err(|err| provider_url_error(&self.config.discord_token_url, err))?;
        let redirect_url =
            RedirectUrl::new(redirect_uri.clone()).map_err(|source| OAuthError::MalformedUrl {
                url: redirect_uri,
                source,
            })?;

        let mut client = BasicClient::new(ClientId::new(client_id.to_string()))
            .set_auth_uri(auth_url)
            .set_token_uri(token_url)
            .set_redirect_uri(redirect_url)
            .set_auth_type(AuthType::RequestBody);

        if let Some(client_secret) = client_secret {
            client = client.set_client_secret(ClientSecret::new(client_secret.to_string()));
        }

        Ok(client)
    }
}

/// Checks the public base URL and returns it without trailing slashes.
///
/// # Returns
/// - `Ok(String)` - Normalized base URL
/// - `Err(OAuthError::DuplicateProtocol)` - Contains `https://https://` or `http://http://`
/// - `Err(OAuthError::PlaceholderUrl)` - Contains a `...` placeholder
/// - `Err(OAuthError::MalformedUrl)` - Not an absolute URL
pub fn validate_app_url(app_url: &str) -> Result<String, OAuthError> {
    let base = app_url.trim().trim_end_matches('/');

    if base.contains("https://https://") || base.contains("http://http://") {
        return Err(OAuthError::DuplicateProtocol(app_url.to_string()));
    }

    if base.contains("...") {
        return Err(OAuthError::PlaceholderUrl(app_url.to_string()));
    }

    Url::parse(base).map_err(|source| OAuthError::MalformedUrl {
        url: app_url.to_string(),
        source,
    })?;

    Ok(base.to_string())
}

fn provider_url_error(url: &str, err: url::ParseError) -> OAuthError {
    OAuthError::AuthFailed(format!("invalid Discord endpoint '{}': {}", url, err))
}
