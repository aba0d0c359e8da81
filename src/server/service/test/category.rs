use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::category::CreateTicketCategoryDto,
    server::{
        error::AppError, model::category::CreateTicketCategoryParams,
        service::category::TicketCategoryService,
    },
};

fn create_params(guild_id: &str, name: &str, category_id: &str) -> CreateTicketCategoryParams {
    CreateTicketCategoryParams::from_dto(
        guild_id.to_string(),
        CreateTicketCategoryDto {
            name: name.to_string(),
            emoji: None,
            category_id: category_id.to_string(),
            support_roles: vec![],
        },
    )
}

/// Tests the add, list, remove cycle of one category.
///
/// Expected: listed with a generated id after adding, gone after removing, and removing an
/// unknown id still succeeds
#[tokio::test]
async fn adds_lists_and_removes_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = TicketCategoryService::new(db);

    let created = service.create(create_params("g1", "Support", "123")).await?;

    let categories = service.get_by_guild_id("g1").await?;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, created.id);
    assert_eq!(categories[0].name, "Support");
    assert_eq!(categories[0].category_id, "123");

    service.delete("g1", &created.id.to_string()).await?;
    assert!(service.get_by_guild_id("g1").await?.is_empty());

    service.delete("g1", "nonexistent").await?;

    Ok(())
}

/// Tests removing another guild's category through the wrong guild.
///
/// Expected: Ok(()) and the category still exists
#[tokio::test]
async fn delete_is_scoped_to_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_category(db, "g2").await?;

    let service = TicketCategoryService::new(db);
    service.delete("g1", &other.id.to_string()).await?;

    assert_eq!(service.get_by_guild_id("g2").await?.len(), 1);

    Ok(())
}

/// Tests input validation on create.
///
/// Expected: Err(BadRequest) for a blank name, a non-numeric category or a non-numeric role,
/// and nothing stored
#[tokio::test]
async fn rejects_invalid_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = TicketCategoryService::new(db);

    let blank_name = service.create(create_params("g1", "   ", "123")).await;
    assert!(matches!(blank_name, Err(AppError::BadRequest(_))));

    let bad_category = service.create(create_params("g1", "Support", "general")).await;
    assert!(matches!(bad_category, Err(AppError::BadRequest(_))));

    let mut bad_role = create_params("g1", "Support", "123");
    bad_role.support_roles = vec!["456".to_string(), "@moderators".to_string()];
    let bad_role = service.create(bad_role).await;
    assert!(matches!(bad_role, Err(AppError::BadRequest(_))));

    assert!(service.get_by_guild_id("g1").await?.is_empty());

    Ok(())
}

/// Tests text fields are trimmed and a blank emoji dropped.
///
/// Expected: stored without surrounding whitespace, emoji None
#[tokio::test]
async fn normalizes_category_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_config_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = TicketCategoryService::new(db);

    let params = CreateTicketCategoryParams::from_dto(
        "g1".to_string(),
        CreateTicketCategoryDto {
            name: "  Billing ".to_string(),
            emoji: Some(" ".to_string()),
            category_id: " 123 ".to_string(),
            support_roles: vec![" 456".to_string()],
        },
    );

    let category = service.create(params).await?;

    assert_eq!(category.name, "Billing");
    assert!(category.emoji.is_none());
    assert_eq!(category.category_id, "123");
    assert_eq!(category.support_roles, vec!["456"]);

    Ok(())
}
