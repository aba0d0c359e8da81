use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GuildConfigDto {
    pub guild_id: String,
    pub transcript_channel_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateGuildConfigDto {
    /// Channel for ticket transcripts; `null` clears it.
    #[serde(default)]
    pub transcript_channel_id: Option<String>,
}
