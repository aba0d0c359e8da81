use std::time::Duration;

use axum_extra::extract::cookie::Key;

use crate::server::{
    config::{Config, SESSION_SECRET_MIN_LEN},
    error::{config::ConfigError, AppError},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a bounded connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the config tables exist before the first
/// request. Requests beyond the pool size wait for a free connection.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!(
        "Connected to database with up to {} connections",
        config.database_max_connections
    );

    Ok(db)
}

/// Builds the HTTP client used for Discord requests.
///
/// Redirects are not followed so that a provider response is never replaced by whatever a
/// redirect points at.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(15))
        .build()?;

    Ok(client)
}

/// Derives the private cookie key from `SESSION_SECRET`.
pub fn setup_cookie_key(config: &Config) -> Result<Key, AppError> {
    let key = Key::try_from(config.session_secret.as_bytes())
        .map_err(|_| ConfigError::SessionSecretTooShort(SESSION_SECRET_MIN_LEN))?;

    Ok(key)
}
