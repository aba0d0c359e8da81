use super::*;

/// Tests finding an existing guild config.
///
/// Expected: Ok(Some) with the stored transcript channel
#[tokio::test]
async fn finds_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_guild_config(db, "123456789").await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.find_by_guild_id("123456789").await?;

    assert!(config.is_some());
    let config = config.unwrap();
    assert_eq!(config.guild_id, "123456789");
    assert_eq!(config.transcript_channel_id, stored.transcript_channel_id);

    Ok(())
}

/// Tests looking up a guild that has never been configured.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unconfigured_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db, "111").await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.find_by_guild_id("222").await?;

    assert!(config.is_none());

    Ok(())
}
