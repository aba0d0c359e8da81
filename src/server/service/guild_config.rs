use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::guild_config::{GuildConfig, UpsertGuildConfigParam},
    util::parse::is_snowflake,
};

pub struct GuildConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a guild's configuration, or an empty one if it was never saved.
    pub async fn get(&self, guild_id: &str) -> Result<GuildConfig, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        let config = repo
            .find_by_guild_id(guild_id)
            .await?
            .unwrap_or_else(|| GuildConfig::empty(guild_id.to_string()));

        Ok(config)
    }

    /// Saves a guild's configuration, replacing any previous one.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The stored configuration
    /// - `Err(AppError::BadRequest)` - Transcript channel is not a snowflake
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, param: UpsertGuildConfigParam) -> Result<GuildConfig, AppError> {
        if let Some(channel_id) = &param.transcript_channel_id {
            if !is_snowflake(channel_id) {
                return Err(AppError::BadRequest(
                    "transcript_channel_id must be a Discord channel ID".to_string(),
                ));
            }
        }

        let repo = GuildConfigRepository::new(self.db);

        let config = repo.upsert(param).await?;

        tracing::info!("Updated configuration of guild {}", config.guild_id);

        Ok(config)
    }
}
