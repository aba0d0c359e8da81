//! Ticket category domain models and parameters.

use crate::model::category::{CreateTicketCategoryDto, TicketCategoryDto};

/// A ticket category with its support roles in configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketCategory {
    pub id: i32,
    pub guild_id: String,
    pub name: String,
    pub emoji: Option<String>,
    /// Discord channel category that new ticket channels are created under.
    pub category_id: String,
    pub support_roles: Vec<String>,
}

impl TicketCategory {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The ticket category row
    /// - `support_roles` - Its support role rows, already sorted by position
    pub fn from_entity(
        entity: entity::ticket_category::Model,
        support_roles: Vec<entity::ticket_category_support_role::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            name: entity.name,
            emoji: entity.emoji,
            category_id: entity.category_id,
            support_roles: support_roles.into_iter().map(|role| role.role_id).collect(),
        }
    }

    pub fn into_dto(self) -> TicketCategoryDto {
        TicketCategoryDto {
            id: self.id,
            guild_id: self.guild_id,
            name: self.name,
            emoji: self.emoji,
            category_id: self.category_id,
            support_roles: self.support_roles,
        }
    }
}

/// Parameters for creating a ticket category.
#[derive(Debug, Clone)]
pub struct CreateTicketCategoryParams {
    pub guild_id: String,
    pub name: String,
    pub emoji: Option<String>,
    pub category_id: String,
    pub support_roles: Vec<String>,
}

impl CreateTicketCategoryParams {
    /// Converts the request body, trimming text fields and dropping a blank emoji.
    pub fn from_dto(guild_id: String, dto: CreateTicketCategoryDto) -> Self {
        Self {
            guild_id,
            name: dto.name.trim().to_string(),
            emoji: dto
                .emoji
                .map(|emoji| emoji.trim().to_string())
                .filter(|emoji| !emoji.is_empty()),
            category_id: dto.category_id.trim().to_string(),
            support_roles: dto
                .support_roles
                .into_iter()
                .map(|role| role.trim().to_string())
                .collect(),
        }
    }
}
