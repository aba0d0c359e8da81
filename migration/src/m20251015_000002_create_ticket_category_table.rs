use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketCategory::Id))
                    .col(string(TicketCategory::GuildId))
                    .col(string(TicketCategory::Name))
                    .col(string_null(TicketCategory::Emoji))
                    .col(string(TicketCategory::CategoryId))
                    .col(timestamp_with_time_zone(TicketCategory::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_category_guild_id")
                    .table(TicketCategory::Table)
                    .col(TicketCategory::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketCategory {
    Table,
    Id,
    GuildId,
    Name,
    Emoji,
    CategoryId,
    CreatedAt,
}
