use super::*;

/// Tests upserting a config for a new guild.
///
/// Expected: Ok with a new row created
#[tokio::test]
async fn inserts_new_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .upsert(UpsertGuildConfigParam {
            guild_id: "123".to_string(),
            transcript_channel_id: Some("555".to_string()),
        })
        .await?;

    assert_eq!(config.guild_id, "123");
    assert_eq!(config.transcript_channel_id, Some("555".to_string()));

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests upserting replaces the existing row instead of adding a second one.
///
/// Expected: Ok with the transcript channel updated and one row in the table
#[tokio::test]
async fn updates_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db, "123").await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .upsert(UpsertGuildConfigParam {
            guild_id: "123".to_string(),
            transcript_channel_id: Some("777".to_string()),
        })
        .await?;

    assert_eq!(config.transcript_channel_id, Some("777".to_string()));

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    let stored = repo.find_by_guild_id("123").await?.unwrap();
    assert_eq!(stored.transcript_channel_id, Some("777".to_string()));

    Ok(())
}

/// Tests clearing the transcript channel.
///
/// Expected: Ok with transcript_channel_id None
#[tokio::test]
async fn clears_transcript_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db, "123").await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .upsert(UpsertGuildConfigParam {
            guild_id: "123".to_string(),
            transcript_channel_id: None,
        })
        .await?;

    assert!(config.transcript_channel_id.is_none());

    Ok(())
}
