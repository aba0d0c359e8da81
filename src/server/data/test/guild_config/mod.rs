use crate::server::{
    data::guild_config::GuildConfigRepository, model::guild_config::UpsertGuildConfigParam,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod upsert;
