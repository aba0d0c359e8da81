use crate::server::error::config::ConfigError;

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_API_URL: &str = "https://discord.com/api";

const DEFAULT_APP_URL: &str = "http://localhost:3000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Minimum length of `SESSION_SECRET`, the key material for cookie encryption.
pub const SESSION_SECRET_MIN_LEN: usize = 64;

/// Application configuration loaded from the environment.
///
/// Only the database URL and session secret are required at startup. The Discord
/// credentials and public URL are validated when a login is attempted so that a
/// misconfigured deployment still serves the dashboard and reports the problem through
/// the login error codes.
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,

    pub session_secret: String,
    /// Marks cookies `Secure` when running in production.
    pub production: bool,
    pub bind_addr: String,

    pub discord_client_id: Option<String>,
    pub discord_client_secret: Option<String>,
    /// Public base URL of the dashboard as configured, before validation.
    pub app_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let session_secret = required_var("SESSION_SECRET")?;
        if session_secret.len() < SESSION_SECRET_MIN_LEN {
            return Err(ConfigError::SessionSecretTooShort(SESSION_SECRET_MIN_LEN));
        }

        let database_max_connections = match optional_var("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidEnvVar("DATABASE_MAX_CONNECTIONS".to_string()))?,
            None => DEFAULT_DATABASE_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            database_max_connections,
            session_secret,
            production: optional_var("APP_ENV").is_some_and(|env| env == "production"),
            bind_addr: optional_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            discord_client_id: optional_var("DISCORD_CLIENT_ID"),
            discord_client_secret: optional_var("DISCORD_CLIENT_SECRET"),
            app_url: optional_var("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_api_url: DISCORD_API_URL.to_string(),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an environment variable, treating blank values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
impl Config {
    /// Fully configured settings for tests. Discord endpoints still point at Discord and
    /// are expected to be replaced with a mock provider where a test reaches them.
    pub fn for_test() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            session_secret: "s".repeat(SESSION_SECRET_MIN_LEN),
            production: false,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            discord_client_id: Some("123456789012345678".to_string()),
            discord_client_secret: Some("client-secret".to_string()),
            app_url: "https://dash.example.com".to_string(),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_api_url: DISCORD_API_URL.to_string(),
        }
    }
}
