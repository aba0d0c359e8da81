use oauth2::{basic::BasicRequestTokenError, AuthorizationCode, RequestTokenError, TokenResponse};
use serde::de::DeserializeOwned;

use crate::server::{
    error::oauth::OAuthError,
    model::session::{GuildSummary, Session, UserProfile},
    service::oauth::DiscordAuthService,
};

impl<'a> DiscordAuthService<'a> {
    /// Completes a login by exchanging the authorization code.
    ///
    /// The code is sent to Discord once; nothing is retried. User and guilds are fetched
    /// concurrently with the new access token and the session is only built when both
    /// succeed.
    ///
    /// # Returns
    /// - `Ok(Session)` - New session for the user
    /// - `Err(OAuthError::MissingCredentials)` - `DISCORD_CLIENT_SECRET` is not set
    /// - `Err(OAuthError::TokenExchange)` - Discord rejected the code
    /// - `Err(OAuthError::AuthFailed)` - Network failure or unusable user/guild payload
    /// - Configuration variants of `OAuthError` for an invalid client id or base URL
    pub async fn callback(&self, authorization_code: String) -> Result<Session, OAuthError> {
        let client_secret = self
            .config
            .discord_client_secret
            .as_deref()
            .ok_or(OAuthError::MissingCredentials)?;
        let client = self.oauth_client(Some(client_secret))?;

        let token = client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(token_error)?;

        let access_token = token.access_token().secret();

        let (user, guilds) = tokio::try_join!(
            self.fetch::<UserProfile>("/users/@me", access_token),
            self.fetch::<Vec<GuildSummary>>("/users/@me/guilds", access_token),
        )?;

        tracing::info!(
            "User {} ({}) logged in with {} guilds",
            user.username,
            user.id,
            guilds.len()
        );

        Ok(Session::new(
            access_token.clone(),
            token.expires_in(),
            user,
            guilds,
        ))
    }

    /// GETs a bearer-authenticated Discord API path and decodes the JSON body
    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
    ) -> Result<T, OAuthError> {
        let url = format!("{}{}", self.config.discord_api_url, path);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| OAuthError::AuthFailed(format!("GET {}: {}", path, err)))?;

        response
            .json::<T>()
            .await
            .map_err(|err| OAuthError::AuthFailed(format!("GET {}: {}", path, err)))
    }
}

/// Splits token endpoint failures into provider rejections and transport failures.
fn token_error(err: BasicRequestTokenError<oauth2::HttpClientError<reqwest::Error>>) -> OAuthError {
    match err {
        RequestTokenError::ServerResponse(response) => OAuthError::TokenExchange(format!(
            "{} {}",
            response.error(),
            response.error_description().map(String::as_str).unwrap_or_default()
        )),
        RequestTokenError::Parse(err, body) => OAuthError::TokenExchange(format!(
            "{}: {}",
            err,
            String::from_utf8_lossy(&body)
        )),
        RequestTokenError::Other(reason) => OAuthError::TokenExchange(reason),
        RequestTokenError::Request(err) => OAuthError::AuthFailed(err.to_string()),
    }
}
