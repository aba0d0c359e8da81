use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::category::{CreateTicketCategoryParams, TicketCategory};

pub struct TicketCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketCategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a ticket category together with its support roles.
    ///
    /// The category row and every support role row are inserted in one transaction, so a
    /// failure leaves the guild's existing categories untouched.
    pub async fn create(&self, params: CreateTicketCategoryParams) -> Result<TicketCategory, DbErr> {
        let txn = self.db.begin().await?;

        let category = entity::ticket_category::ActiveModel {
            guild_id: ActiveValue::Set(params.guild_id),
            name: ActiveValue::Set(params.name),
            emoji: ActiveValue::Set(params.emoji),
            category_id: ActiveValue::Set(params.category_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut support_roles = Vec::with_capacity(params.support_roles.len());
        for (position, role_id) in params.support_roles.into_iter().enumerate() {
            let role = entity::ticket_category_support_role::ActiveModel {
                ticket_category_id: ActiveValue::Set(category.id),
                role_id: ActiveValue::Set(role_id),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            support_roles.push(role);
        }

        txn.commit().await?;

        Ok(TicketCategory::from_entity(category, support_roles))
    }

    /// Gets every category of a guild in creation order, with support roles in configured order.
    pub async fn get_by_guild_id(&self, guild_id: &str) -> Result<Vec<TicketCategory>, DbErr> {
        let categories = entity::prelude::TicketCategory::find()
            .filter(entity::ticket_category::Column::GuildId.eq(guild_id))
            .order_by_asc(entity::ticket_category::Column::Id)
            .all(self.db)
            .await?;

        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<i32> = categories.iter().map(|c| c.id).collect();

        // Fetch all support roles in one query
        let mut roles_by_category: HashMap<i32, Vec<entity::ticket_category_support_role::Model>> =
            HashMap::new();
        let roles = entity::prelude::TicketCategorySupportRole::find()
            .filter(
                entity::ticket_category_support_role::Column::TicketCategoryId.is_in(category_ids),
            )
            .order_by_asc(entity::ticket_category_support_role::Column::Position)
            .all(self.db)
            .await?;
        for role in roles {
            roles_by_category
                .entry(role.ticket_category_id)
                .or_default()
                .push(role);
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let roles = roles_by_category.remove(&category.id).unwrap_or_default();
                TicketCategory::from_entity(category, roles)
            })
            .collect())
    }

    /// Deletes a category of the guild and its support roles.
    ///
    /// A category belonging to another guild is left alone, the same as a missing one.
    ///
    /// # Returns
    /// - `Ok(true)` - The category existed and was deleted
    /// - `Ok(false)` - No category with this ID exists in the guild
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, guild_id: &str, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let category = entity::prelude::TicketCategory::find_by_id(id)
            .filter(entity::ticket_category::Column::GuildId.eq(guild_id))
            .one(&txn)
            .await?;

        let Some(category) = category else {
            return Ok(false);
        };

        entity::prelude::TicketCategorySupportRole::delete_many()
            .filter(entity::ticket_category_support_role::Column::TicketCategoryId.eq(category.id))
            .exec(&txn)
            .await?;

        entity::prelude::TicketCategory::delete_by_id(category.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}
