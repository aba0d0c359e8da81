//! Guild config factory for creating test `guild_config` rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_snowflake;

/// Factory for creating test guild configs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let config = GuildConfigFactory::new(&db, "987654321")
///     .transcript_channel_id(Some("555".to_string()))
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    transcript_channel_id: Option<String>,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new factory for the given guild.
    ///
    /// Defaults:
    /// - transcript_channel_id: a fresh unique snowflake
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            transcript_channel_id: Some(next_snowflake()),
        }
    }

    /// Sets the transcript channel ID.
    pub fn transcript_channel_id(mut self, transcript_channel_id: Option<String>) -> Self {
        self.transcript_channel_id = transcript_channel_id;
        self
    }

    /// Builds and inserts the guild config into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            transcript_channel_id: ActiveValue::Set(self.transcript_channel_id),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild config with default values.
///
/// Shorthand for `GuildConfigFactory::new(db, guild_id).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db, guild_id).build().await
}
