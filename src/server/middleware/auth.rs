use axum_extra::extract::cookie::PrivateCookieJar;

use crate::server::{
    error::auth::AuthError, middleware::session::SessionCookies, model::session::Session,
};

pub enum Permission<'a> {
    /// `MANAGE_GUILD` on the given guild, as captured at login.
    ManageGuild(&'a str),
}

pub struct AuthGuard<'a> {
    cookies: &'a SessionCookies,
    jar: &'a PrivateCookieJar,
}

impl<'a> AuthGuard<'a> {
    pub fn new(cookies: &'a SessionCookies, jar: &'a PrivateCookieJar) -> Self {
        Self { cookies, jar }
    }

    /// Reads the session and checks every permission against it.
    ///
    /// # Returns
    /// - `Ok(Session)` - Authenticated and all permissions granted
    /// - `Err(AuthError::Unauthenticated | AuthError::CorruptSession)` - No usable session
    /// - `Err(AuthError::Forbidden)` - A permission is not granted
    pub fn require(&self, permissions: &[Permission<'_>]) -> Result<Session, AuthError> {
        let session = self.cookies.read(self.jar)?;

        for permission in permissions {
            match permission {
                Permission::ManageGuild(guild_id) => {
                    if !session.authorize(guild_id) {
                        return Err(AuthError::Forbidden {
                            user_id: session.user.id.clone(),
                            guild_id: guild_id.to_string(),
                        });
                    }
                }
            }
        }

        Ok(session)
    }
}
