use sea_orm::entity::prelude::*;

/// Role allowed to handle tickets of a category. `position` keeps the order
/// the roles were configured in.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket_category_support_role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ticket_category_id: i32,
    pub role_id: String,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ticket_category::Entity",
        from = "Column::TicketCategoryId",
        to = "super::ticket_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TicketCategory,
}

impl Related<super::ticket_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
