//! Ticket category factory for creating test `ticket_category` rows together with their
//! support roles.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, next_snowflake};

/// Factory for creating test ticket categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let category = TicketCategoryFactory::new(&db, "987654321")
///     .name("Billing")
///     .emoji(Some("💳".to_string()))
///     .support_roles(["111", "222"])
///     .build()
///     .await?;
/// ```
pub struct TicketCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    emoji: Option<String>,
    category_id: String,
    support_roles: Vec<String>,
}

impl<'a> TicketCategoryFactory<'a> {
    /// Creates a new factory for the given guild.
    ///
    /// Defaults:
    /// - name: `"Category {id}"`
    /// - emoji: `None`
    /// - category_id: a fresh unique snowflake
    /// - support_roles: empty
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            name: format!("Category {}", next_id()),
            emoji: None,
            category_id: next_snowflake(),
            support_roles: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn emoji(mut self, emoji: Option<String>) -> Self {
        self.emoji = emoji;
        self
    }

    pub fn category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = category_id.into();
        self
    }

    /// Sets the support roles, stored in the given order.
    pub fn support_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.support_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Builds and inserts the category and its support roles.
    ///
    /// # Returns
    /// - `Ok(entity::ticket_category::Model)` - Created category row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ticket_category::Model, DbErr> {
        let category = entity::ticket_category::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            emoji: ActiveValue::Set(self.emoji),
            category_id: ActiveValue::Set(self.category_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (position, role_id) in self.support_roles.into_iter().enumerate() {
            entity::ticket_category_support_role::ActiveModel {
                ticket_category_id: ActiveValue::Set(category.id),
                role_id: ActiveValue::Set(role_id),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(category)
    }
}

/// Creates a ticket category with default values.
///
/// Shorthand for `TicketCategoryFactory::new(db, guild_id).build().await`.
pub async fn create_category(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::ticket_category::Model, DbErr> {
    TicketCategoryFactory::new(db, guild_id).build().await
}
