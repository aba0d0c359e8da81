use sea_orm::entity::prelude::*;

/// A ticket category a guild member can open tickets in.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub name: String,
    pub emoji: Option<String>,
    /// Discord channel category new ticket channels are created under.
    pub category_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ticket_category_support_role::Entity")]
    TicketCategorySupportRole,
}

impl Related<super::ticket_category_support_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketCategorySupportRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
