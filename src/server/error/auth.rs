use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::middleware::session::SESSION_COOKIE_NAMES};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No usable session cookies were sent with the request.
    ///
    /// Covers absent cookies, cookies that failed decryption and sessions past their
    /// expiry. Results in a 401 Unauthorized response.
    #[error("Request has no valid session")]
    Unauthenticated,

    /// A session cookie decrypted but its contents could not be parsed.
    ///
    /// Results in a 401 Unauthorized response that also clears the session cookies so the
    /// browser does not keep resending them.
    #[error("Session cookie '{cookie}' could not be parsed: {reason}")]
    CorruptSession { cookie: &'static str, reason: String },

    /// The user is logged in but lacks `MANAGE_GUILD` on the requested guild, or the
    /// guild is not in the guild list captured at login.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} is not allowed to manage guild {guild_id}")]
    Forbidden { user_id: String, guild_id: String },
}

/// Converts authentication errors into HTTP responses.
///
/// - `Unauthenticated` → 401 with code `unauthenticated`
/// - `CorruptSession` → 401 with code `corrupt_session` and removal cookies
/// - `Forbidden` → 403 with code `forbidden`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("unauthenticated", "Not authenticated")),
            )
                .into_response(),
            Self::CorruptSession { .. } => {
                tracing::warn!("{}", self);

                let jar = SESSION_COOKIE_NAMES
                    .into_iter()
                    .fold(CookieJar::new(), |jar, name| jar.add(removal_cookie(name)));

                (
                    StatusCode::UNAUTHORIZED,
                    jar,
                    Json(ErrorDto::new("corrupt_session", "Invalid session data")),
                )
                    .into_response()
            }
            Self::Forbidden { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new("forbidden", "Unauthorized")),
                )
                    .into_response()
            }
        }
    }
}

/// Builds a cookie that makes the browser drop `name` immediately.
fn removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}
