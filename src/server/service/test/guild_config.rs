use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::guild_config::UpdateGuildConfigDto,
    server::{
        error::AppError, model::guild_config::UpsertGuildConfigParam,
        service::guild_config::GuildConfigService,
    },
};

fn update(guild_id: &str, transcript_channel_id: Option<&str>) -> UpsertGuildConfigParam {
    UpsertGuildConfigParam::from_dto(
        guild_id.to_string(),
        UpdateGuildConfigDto {
            transcript_channel_id: transcript_channel_id.map(str::to_string),
        },
    )
}

/// Tests reading a guild that was never configured.
///
/// Expected: empty configuration for that guild
#[tokio::test]
async fn returns_empty_config_for_new_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let config = GuildConfigService::new(db).get("g1").await?;

    assert_eq!(config.guild_id, "g1");
    assert!(config.transcript_channel_id.is_none());

    Ok(())
}

/// Tests saving then reading a configuration.
///
/// Expected: the saved transcript channel, last write wins
#[tokio::test]
async fn saves_and_reads_config() -> Result<(), AppError> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = GuildConfigService::new(db);

    service.update(update("g1", Some("555"))).await?;
    service.update(update("g1", Some("777"))).await?;

    let config = service.get("g1").await?;
    assert_eq!(config.transcript_channel_id.as_deref(), Some("777"));

    Ok(())
}

/// Tests a blank channel clears the transcript channel.
///
/// Expected: transcript_channel_id None after saving ""
#[tokio::test]
async fn blank_channel_clears_transcript_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db, "g1").await?;

    let service = GuildConfigService::new(db);
    let config = service.update(update("g1", Some("  "))).await?;

    assert!(config.transcript_channel_id.is_none());

    Ok(())
}

/// Expected: Err(BadRequest) for a non-numeric channel
#[tokio::test]
async fn rejects_invalid_transcript_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuildConfigService::new(db)
        .update(update("g1", Some("#transcripts")))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
