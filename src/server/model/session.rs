//! Session domain model and the guild access gate.
//!
//! A `Session` is assembled once at the end of a successful Discord login and then only
//! read back from cookies. Authorization is derived from the guild list captured at that
//! moment; it is not refreshed until the user logs in again.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::{GuildDto, UserDto},
    server::util::permission::has_manage_guild,
};

/// Upper bound on session lifetime, applied whatever `expires_in` Discord reports.
pub fn session_max_age() -> Duration {
    Duration::days(7)
}

/// Discord user profile as returned by `/users/@me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Discord user snowflake.
    pub id: String,
    pub username: String,
    /// `"0"` for accounts migrated to unique usernames.
    #[serde(default)]
    pub discriminator: String,
    /// Avatar hash, `None` for the default avatar.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserProfile {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            discriminator: self.discriminator,
            avatar: self.avatar,
        }
    }
}

/// Partial guild as returned by `/users/@me/guilds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildSummary {
    /// Discord guild snowflake.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    /// The user's permission bitmask in this guild, as a decimal string.
    pub permissions: String,
}

impl GuildSummary {
    /// Whether the user holds `MANAGE_GUILD` in this guild.
    pub fn can_manage(&self) -> bool {
        has_manage_guild(&self.permissions)
    }

    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            id: self.id,
            name: self.name,
            icon: self.icon,
            owner: self.owner,
            permissions: self.permissions,
        }
    }
}

/// An authenticated dashboard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Discord OAuth2 bearer token.
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserProfile,
    /// Every guild the user was in at login, in Discord's order.
    pub guilds: Vec<GuildSummary>,
}

impl Session {
    /// Creates a session issued now.
    ///
    /// The lifetime is the provider's `expires_in` capped at [`session_max_age`], or the cap
    /// itself when the provider reports no expiry.
    ///
    /// # Arguments
    /// - `access_token` - Bearer token from the token exchange
    /// - `expires_in` - Token lifetime reported by Discord, if any
    /// - `user` - Profile of the logged-in user
    /// - `guilds` - Guild list of the logged-in user
    pub fn new(
        access_token: String,
        expires_in: Option<std::time::Duration>,
        user: UserProfile,
        guilds: Vec<GuildSummary>,
    ) -> Self {
        let ceiling = session_max_age();
        let lifetime = expires_in
            .and_then(|expires_in| Duration::from_std(expires_in).ok())
            .map_or(ceiling, |expires_in| expires_in.min(ceiling));

        Self {
            access_token,
            expires_at: Utc::now() + lifetime,
            user,
            guilds,
        }
    }

    /// Time left before the session expires, clamped to `[0, session_max_age()]`.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).clamp(Duration::zero(), session_max_age())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Guilds the user may administer, in their original order.
    pub fn authorized_guilds(&self) -> impl Iterator<Item = &GuildSummary> {
        self.guilds.iter().filter(|guild| guild.can_manage())
    }

    /// Whether the user may administer `guild_id`.
    ///
    /// Guilds the user joined or was promoted in after login stay unauthorized until the
    /// next login.
    pub fn authorize(&self, guild_id: &str) -> bool {
        self.authorized_guilds().any(|guild| guild.id == guild_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild(id: &str, permissions: &str) -> GuildSummary {
        GuildSummary {
            id: id.to_string(),
            name: format!("Guild {}", id),
            icon: None,
            owner: false,
            permissions: permissions.to_string(),
        }
    }

    fn user() -> UserProfile {
        UserProfile {
            id: "100".to_string(),
            username: "ticket_admin".to_string(),
            discriminator: "0".to_string(),
            avatar: None,
        }
    }

    fn session_with(guilds: Vec<GuildSummary>) -> Session {
        Session::new("token".to_string(), None, user(), guilds)
    }

    /// Expected: only guilds with MANAGE_GUILD, in input order
    #[test]
    fn authorized_guilds_is_ordered_subset() {
        let session = session_with(vec![
            guild("3", "32"),
            guild("1", "0"),
            guild("2", "1099511627808"),
            guild("4", "1099511627776"),
            guild("5", "8"),
            guild("6", "2147483647"),
        ]);

        let ids: Vec<&str> = session
            .authorized_guilds()
            .map(|guild| guild.id.as_str())
            .collect();

        assert_eq!(ids, vec!["3", "2", "6"]);
        for authorized in session.authorized_guilds() {
            assert!(session.guilds.contains(authorized));
        }
    }

    #[test]
    fn authorize_requires_manage_guild_in_cached_list() {
        let session = session_with(vec![guild("g1", "32"), guild("g2", "16")]);

        assert!(session.authorize("g1"));
        assert!(!session.authorize("g2"));
        assert!(!session.authorize("g3"));
    }

    #[test]
    fn owner_flag_alone_does_not_authorize() {
        let mut owned = guild("g1", "0");
        owned.owner = true;
        let session = session_with(vec![owned]);

        assert!(!session.authorize("g1"));
    }

    #[test]
    fn caps_lifetime_at_seven_days() {
        let before = Utc::now();
        let session = Session::new(
            "token".to_string(),
            Some(std::time::Duration::from_secs(60 * 60 * 24 * 365)),
            user(),
            vec![],
        );

        assert!(session.expires_at <= Utc::now() + session_max_age());
        assert!(session.expires_at >= before + session_max_age());
    }

    #[test]
    fn uses_shorter_provider_expiry() {
        let session = Session::new(
            "token".to_string(),
            Some(std::time::Duration::from_secs(3600)),
            user(),
            vec![],
        );

        let remaining = session.remaining(Utc::now());
        assert!(remaining <= Duration::hours(1));
        assert!(remaining > Duration::minutes(59));
    }

    #[test]
    fn uses_ceiling_without_provider_expiry() {
        let session = Session::new("token".to_string(), None, user(), vec![]);

        assert!(session.remaining(Utc::now()) > Duration::days(6));
    }

    #[test]
    fn reports_expiry() {
        let mut session = session_with(vec![]);
        assert!(!session.is_expired(Utc::now()));

        session.expires_at = Utc::now() - Duration::seconds(1);
        assert!(session.is_expired(Utc::now()));
        assert_eq!(session.remaining(Utc::now()), Duration::zero());
    }
}
