use super::*;

/// Tests listing returns categories in creation order.
///
/// Expected: Ok with categories ordered by insertion
#[tokio::test]
async fn lists_categories_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketCategoryRepository::new(db);
    repo.create(params("g1", "Zeta", &[])).await?;
    repo.create(params("g1", "Alpha", &[])).await?;
    repo.create(params("g1", "Mid", &[])).await?;

    let names: Vec<String> = repo
        .get_by_guild_id("g1")
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);

    Ok(())
}

/// Tests listing is scoped to the requested guild.
///
/// Expected: Ok with only the guild's own categories and their own roles
#[tokio::test]
async fn lists_only_categories_of_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ticket_category::TicketCategoryFactory::new(db, "g1")
        .name("Mine")
        .support_roles(["1"])
        .build()
        .await?;
    factory::ticket_category::TicketCategoryFactory::new(db, "g2")
        .name("Theirs")
        .support_roles(["2", "3"])
        .build()
        .await?;

    let repo = TicketCategoryRepository::new(db);
    let categories = repo.get_by_guild_id("g1").await?;

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Mine");
    assert_eq!(categories[0].support_roles, vec!["1"]);

    Ok(())
}

/// Tests listing a guild without categories.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_guild_without_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketCategoryRepository::new(db);
    let categories = repo.get_by_guild_id("g1").await?;

    assert!(categories.is_empty());

    Ok(())
}
