//! Purchased ticket entity. Unique per (ticket type, purchaser email).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub ticket_type_id: i32,

    pub purchaser_first_name: String,

    pub purchaser_last_name: String,

    #[sea_orm(indexed)]
    pub purchaser_email: String,

    #[sea_orm(nullable)]
    pub purchaser_address: Option<String>,

    pub purchased_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ticket_type::Entity",
        from = "Column::TicketTypeId",
        to = "super::ticket_type::Column::Id",
        on_delete = "Cascade"
    )]
    TicketType,
}

impl Related<super::ticket_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
