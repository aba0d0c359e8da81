use sea_orm_migration::{prelude::*, schema::*};

use super::m20251015_000002_create_ticket_category_table::TicketCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketCategorySupportRole::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketCategorySupportRole::Id))
                    .col(integer(TicketCategorySupportRole::TicketCategoryId))
                    .col(string(TicketCategorySupportRole::RoleId))
                    .col(integer(TicketCategorySupportRole::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_category_support_role_category_id")
                            .from(
                                TicketCategorySupportRole::Table,
                                TicketCategorySupportRole::TicketCategoryId,
                            )
                            .to(TicketCategory::Table, TicketCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(TicketCategorySupportRole::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketCategorySupportRole {
    Table,
    Id,
    TicketCategoryId,
    RoleId,
    Position,
}
