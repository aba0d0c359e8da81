use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub discriminator: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GuildDto {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub owner: bool,
    /// Permission bitmask as a decimal string.
    pub permissions: String,
}

/// The logged-in user and the guilds they can manage.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeDto {
    pub user: UserDto,
    pub guilds: Vec<GuildDto>,
}

/// OAuth configuration diagnostics. Never contains secrets.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OAuthDiagnosticsDto {
    pub client_id_configured: bool,
    pub client_id_valid: bool,
    pub client_secret_configured: bool,
    /// Callback URL registered with Discord, when the base URL is valid.
    pub redirect_uri: Option<String>,
    /// Login error code the base URL would produce, if any.
    pub app_url_error: Option<String>,
}
