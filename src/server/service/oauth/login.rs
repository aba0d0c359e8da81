use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::{
    error::oauth::OAuthError,
    service::oauth::{DiscordAuthService, SCOPES},
};

impl<'a> DiscordAuthService<'a> {
    /// Builds the Discord authorization URL.
    ///
    /// The returned CSRF token must be stored by the caller and compared with the `state`
    /// Discord sends back to the callback.
    pub fn login_url(&self) -> Result<(Url, CsrfToken), OAuthError> {
        let client = self.oauth_client(None)?;

        let (authorize_url, csrf_state) = client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .url();

        tracing::debug!("Redirecting to Discord authorization at {}", authorize_url.path());

        Ok((authorize_url, csrf_state))
    }
}
