use super::*;

/// Tests deleting a category removes it and its support roles.
///
/// Expected: Ok(true) with no category or support role rows left
#[tokio::test]
async fn deletes_category_and_support_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketCategoryRepository::new(db);
    let category = repo.create(params("g1", "Support", &["1", "2"])).await?;

    let deleted = repo.delete("g1", category.id).await?;

    assert!(deleted);
    assert!(repo.get_by_guild_id("g1").await?.is_empty());
    let role_count = entity::prelude::TicketCategorySupportRole::find()
        .count(db)
        .await?;
    assert_eq!(role_count, 0);

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketCategoryRepository::new(db);
    let deleted = repo.delete("g1", 999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests a guild cannot delete another guild's category.
///
/// Expected: Ok(false) with the other guild's category intact
#[tokio::test]
async fn does_not_delete_category_of_other_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_category(db, "g2").await?;

    let repo = TicketCategoryRepository::new(db);
    let deleted = repo.delete("g1", other.id).await?;

    assert!(!deleted);
    assert_eq!(repo.get_by_guild_id("g2").await?.len(), 1);

    Ok(())
}
