use crate::{
    model::auth::OAuthDiagnosticsDto,
    server::{error::oauth::OAuthError, service::oauth::DiscordAuthService},
};

impl<'a> DiscordAuthService<'a> {
    /// Reports which parts of the OAuth configuration are usable. Never includes secrets.
    pub fn diagnostics(&self) -> OAuthDiagnosticsDto {
        let client_id_valid = self.client_id().is_ok();
        let redirect_uri = self.redirect_uri();

        OAuthDiagnosticsDto {
            client_id_configured: self.config.discord_client_id.is_some(),
            client_id_valid,
            client_secret_configured: self.config.discord_client_secret.is_some(),
            app_url_error: redirect_uri
                .as_ref()
                .err()
                .map(|err: &OAuthError| err.code().to_string()),
            redirect_uri: redirect_uri.ok(),
        }
    }
}
