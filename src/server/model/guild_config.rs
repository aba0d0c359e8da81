//! Guild configuration domain model.

use crate::model::guild_config::{GuildConfigDto, UpdateGuildConfigDto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildConfig {
    pub guild_id: String,
    pub transcript_channel_id: Option<String>,
}

impl GuildConfig {
    /// Configuration reported for a guild that has never been configured.
    pub fn empty(guild_id: String) -> Self {
        Self {
            guild_id,
            transcript_channel_id: None,
        }
    }

    pub fn from_entity(entity: entity::guild_config::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            transcript_channel_id: entity.transcript_channel_id,
        }
    }

    pub fn into_dto(self) -> GuildConfigDto {
        GuildConfigDto {
            guild_id: self.guild_id,
            transcript_channel_id: self.transcript_channel_id,
        }
    }
}

/// Parameters for inserting or replacing a guild's configuration.
#[derive(Debug, Clone)]
pub struct UpsertGuildConfigParam {
    pub guild_id: String,
    pub transcript_channel_id: Option<String>,
}

impl UpsertGuildConfigParam {
    /// Converts the request body. A blank channel id clears the transcript channel.
    pub fn from_dto(guild_id: String, dto: UpdateGuildConfigDto) -> Self {
        Self {
            guild_id,
            transcript_channel_id: dto
                .transcript_channel_id
                .map(|channel_id| channel_id.trim().to_string())
                .filter(|channel_id| !channel_id.is_empty()),
        }
    }
}
