//! Cookie-backed session storage.
//!
//! The server keeps no session table. A logged-in session lives entirely in three private
//! (encrypted and authenticated) cookies that are always written and removed together:
//!
//! - `session_token` - JSON `{access_token, expires_at}`
//! - `session_user` - JSON of the Discord user profile
//! - `session_guilds` - JSON of the guild list captured at login
//!
//! A fourth private cookie, `oauth_state`, carries the CSRF state between `/auth/login` and
//! `/auth/callback`.
//!
//! Cookies that fail decryption are treated by `PrivateCookieJar` as absent, so a tampered
//! cookie reads the same as a missing one.

use axum::{http::header::SET_COOKIE, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, oauth::OAuthError, AppError},
    model::session::{GuildSummary, Session, UserProfile},
};

pub const SESSION_TOKEN_COOKIE: &str = "session_token";
pub const SESSION_USER_COOKIE: &str = "session_user";
pub const SESSION_GUILDS_COOKIE: &str = "session_guilds";

/// Every cookie making up a session.
pub const SESSION_COOKIE_NAMES: [&str; 3] = [
    SESSION_TOKEN_COOKIE,
    SESSION_USER_COOKIE,
    SESSION_GUILDS_COOKIE,
];

pub const OAUTH_STATE_COOKIE: &str = "oauth_state";

/// Largest `Set-Cookie` value browsers are required to keep, attributes included.
pub const MAX_COOKIE_SIZE: usize = 4096;

/// How long a login may take between `/auth/login` and the provider redirect.
const OAUTH_STATE_MAX_AGE: time::Duration = time::Duration::minutes(10);

#[derive(Serialize, Deserialize)]
struct TokenCookie {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// Reads and writes sessions and OAuth state through a `PrivateCookieJar`.
///
/// All cookies are `HttpOnly`, scoped to `/` and `SameSite=Lax`. `Secure` is set when
/// running in production.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookies {
    secure: bool,
}

impl SessionCookies {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Stores `session` in the jar.
    ///
    /// Cookie max-age is the session's remaining lifetime, so the browser drops the cookies
    /// when the session expires.
    ///
    /// A browser silently discards a cookie larger than [`MAX_COOKIE_SIZE`], which would leave
    /// a partial session behind. The encrypted cookies are measured before anything is
    /// returned and an oversized session is rejected as a whole.
    ///
    /// # Returns
    /// - `Ok(PrivateCookieJar)` - Jar with the three session cookies added
    /// - `Err(AppError::JsonErr)` - Session could not be serialized
    /// - `Err(AppError::OAuthErr)` - `OAuthError::SessionTooLarge` for an oversized cookie
    pub fn write(
        &self,
        jar: PrivateCookieJar,
        session: &Session,
    ) -> Result<PrivateCookieJar, AppError> {
        let max_age = time::Duration::seconds(session.remaining(Utc::now()).num_seconds());

        let token = serde_json::to_string(&TokenCookie {
            access_token: session.access_token.clone(),
            expires_at: session.expires_at,
        })?;
        let user = serde_json::to_string(&session.user)?;
        let guilds = serde_json::to_string(&session.guilds)?;

        let jar = jar
            .add(self.cookie(SESSION_TOKEN_COOKIE, token, max_age))
            .add(self.cookie(SESSION_USER_COOKIE, user, max_age))
            .add(self.cookie(SESSION_GUILDS_COOKIE, guilds, max_age));

        if let Some((cookie, size)) = oversized_cookie(&jar) {
            return Err(OAuthError::SessionTooLarge {
                cookie,
                size,
                limit: MAX_COOKIE_SIZE,
                guilds: session.guilds.len(),
            }
            .into());
        }

        Ok(jar)
    }

    /// Reconstructs the session from the request cookies.
    ///
    /// # Returns
    /// - `Ok(Session)` - All three cookies present, parsed and not expired
    /// - `Err(AuthError::Unauthenticated)` - A cookie is missing or undecryptable, or the
    ///   session has expired
    /// - `Err(AuthError::CorruptSession)` - A cookie decrypted but its JSON does not parse
    pub fn read(&self, jar: &PrivateCookieJar) -> Result<Session, AuthError> {
        let (Some(token), Some(user), Some(guilds)) = (
            jar.get(SESSION_TOKEN_COOKIE),
            jar.get(SESSION_USER_COOKIE),
            jar.get(SESSION_GUILDS_COOKIE),
        ) else {
            return Err(AuthError::Unauthenticated);
        };

        let token: TokenCookie = decode(SESSION_TOKEN_COOKIE, &token)?;
        let user: UserProfile = decode(SESSION_USER_COOKIE, &user)?;
        let guilds: Vec<GuildSummary> = decode(SESSION_GUILDS_COOKIE, &guilds)?;

        let session = Session {
            access_token: token.access_token,
            expires_at: token.expires_at,
            user,
            guilds,
        };

        if session.is_expired(Utc::now()) {
            tracing::debug!("Rejected expired session of user {}", session.user.id);
            return Err(AuthError::Unauthenticated);
        }

        Ok(session)
    }

    /// Removes all session cookies. Safe to call without a session.
    pub fn destroy(&self, jar: PrivateCookieJar) -> PrivateCookieJar {
        SESSION_COOKIE_NAMES
            .into_iter()
            .fold(jar, |jar, name| jar.remove(removal(name)))
    }

    /// Stores the CSRF state issued with a login redirect.
    pub fn set_state(&self, jar: PrivateCookieJar, state: &str) -> PrivateCookieJar {
        jar.add(self.cookie(OAUTH_STATE_COOKIE, state.to_string(), OAUTH_STATE_MAX_AGE))
    }

    /// Reads and removes the CSRF state so it can only be used once.
    pub fn take_state(&self, jar: PrivateCookieJar) -> (PrivateCookieJar, Option<String>) {
        let state = jar
            .get(OAUTH_STATE_COOKIE)
            .map(|cookie| cookie.value().to_string());

        (jar.remove(removal(OAUTH_STATE_COOKIE)), state)
    }

    fn cookie(&self, name: &'static str, value: String, max_age: time::Duration) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(max_age)
            .build()
    }
}

/// First cookie the jar would emit whose encrypted `Set-Cookie` value exceeds
/// [`MAX_COOKIE_SIZE`], with its size.
fn oversized_cookie(jar: &PrivateCookieJar) -> Option<(String, usize)> {
    let response = jar.clone().into_response();

    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .find(|value| value.len() > MAX_COOKIE_SIZE)
        .map(|value| {
            let raw = String::from_utf8_lossy(value.as_bytes());
            let name = raw.split('=').next().unwrap_or_default().to_string();
            (name, value.len())
        })
}

/// Cookie identifying `name` for removal. Path must match the one used when writing.
fn removal(name: &'static str) -> Cookie<'static> {
    Cookie::build(name).path("/").build()
}

fn decode<T: DeserializeOwned>(name: &'static str, cookie: &Cookie<'_>) -> Result<T, AuthError> {
    serde_json::from_str(cookie.value()).map_err(|err| AuthError::CorruptSession {
        cookie: name,
        reason: err.to_string(),
    })
}
