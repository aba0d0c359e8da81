use thiserror::Error;

/// Startup configuration errors. Any of these aborts the server before it binds.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable such as `DATABASE_URL` or `SESSION_SECRET` is unset or blank.
    ///
    /// See `.env.example` for the full list of variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Variable is set but does not parse, e.g. a non-numeric `DATABASE_MAX_CONNECTIONS`.
    #[error("Invalid value for environment variable: {0}")]
    InvalidEnvVar(String),

    /// `SESSION_SECRET` is too short to derive the cookie encryption key from.
    #[error("SESSION_SECRET must be at least {0} bytes long")]
    SessionSecretTooShort(usize),
}
