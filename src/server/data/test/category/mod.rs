use crate::server::{
    data::category::TicketCategoryRepository, model::category::CreateTicketCategoryParams,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_guild_id;

fn params(guild_id: &str, name: &str, support_roles: &[&str]) -> CreateTicketCategoryParams {
    CreateTicketCategoryParams {
        guild_id: guild_id.to_string(),
        name: name.to_string(),
        emoji: None,
        category_id: "123".to_string(),
        support_roles: support_roles.iter().map(|r| r.to_string()).collect(),
    }
}
