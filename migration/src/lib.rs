pub use sea_orm_migration::prelude::*;

mod m20251015_000001_create_guild_config_table;
mod m20251015_000002_create_ticket_category_table;
mod m20251015_000003_create_ticket_category_support_role_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251015_000001_create_guild_config_table::Migration),
            Box::new(m20251015_000002_create_ticket_category_table::Migration),
            Box::new(m20251015_000003_create_ticket_category_support_role_table::Migration),
        ]
    }
}
