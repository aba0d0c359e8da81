use super::*;

/// Tests creating a category without support roles.
///
/// Expected: Ok with a generated id and the given fields
#[tokio::test]
async fn creates_category_without_support_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketCategoryRepository::new(db);
    let category = repo.create(params("g1", "Support", &[])).await?;

    assert!(category.id > 0);
    assert_eq!(category.guild_id, "g1");
    assert_eq!(category.name, "Support");
    assert_eq!(category.category_id, "123");
    assert!(category.support_roles.is_empty());

    let db_category = entity::prelude::TicketCategory::find_by_id(category.id)
        .one(db)
        .await?;
    assert!(db_category.is_some());

    Ok(())
}

/// Tests creating a category with support roles keeps their order.
///
/// Expected: Ok with support roles returned and stored in the given order
#[tokio::test]
async fn creates_category_with_ordered_support_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketCategoryRepository::new(db);
    let mut create = params("g1", "Billing", &["300", "100", "200"]);
    create.emoji = Some("💳".to_string());
    let category = repo.create(create).await?;

    assert_eq!(category.emoji, Some("💳".to_string()));
    assert_eq!(category.support_roles, vec!["300", "100", "200"]);

    let role_count = entity::prelude::TicketCategorySupportRole::find()
        .filter(entity::ticket_category_support_role::Column::TicketCategoryId.eq(category.id))
        .count(db)
        .await?;
    assert_eq!(role_count, 3);

    let listed = repo.get_by_guild_id("g1").await?;
    assert_eq!(listed[0].support_roles, vec!["300", "100", "200"]);

    Ok(())
}

/// Tests that a failed insert leaves no partial category behind.
///
/// Without the support role table the role insert fails after the category row was
/// written inside the transaction.
///
/// Expected: Err and no category rows
#[tokio::test]
async fn rolls_back_category_when_support_roles_fail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TicketCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketCategoryRepository::new(db);
    let result = repo.create(params("g1", "Support", &["100"])).await;

    assert!(result.is_err());

    let count = entity::prelude::TicketCategory::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
