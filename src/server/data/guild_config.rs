use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::guild_config::{GuildConfig, UpsertGuildConfigParam};

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the configuration row of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - The guild has been configured
    /// - `Ok(None)` - No row exists for the guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: &str) -> Result<Option<GuildConfig>, DbErr> {
        let config = entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await?;

        Ok(config.map(GuildConfig::from_entity))
    }

    /// Inserts the guild's configuration or replaces the existing row.
    ///
    /// Concurrent writers are last-write-wins.
    pub async fn upsert(&self, param: UpsertGuildConfigParam) -> Result<GuildConfig, DbErr> {
        let config = entity::prelude::GuildConfig::insert(entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            transcript_channel_id: ActiveValue::Set(param.transcript_channel_id),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::guild_config::Column::GuildId)
                .update_columns([
                    entity::guild_config::Column::TranscriptChannelId,
                    entity::guild_config::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(GuildConfig::from_entity(config))
    }
}
