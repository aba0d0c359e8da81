use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TicketCategoryDto {
    pub id: i32,
    pub guild_id: String,
    pub name: String,
    pub emoji: Option<String>,
    pub category_id: String,
    pub support_roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTicketCategoryDto {
    pub name: String,
    #[serde(default)]
    pub emoji: Option<String>,
    pub category_id: String,
    #[serde(default)]
    pub support_roles: Vec<String>,
}
