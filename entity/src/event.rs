//! Event entity.
//!
//! Events may be free-standing or scoped to a group. The four feature flags
//! gate which sub-resources (polls, ticketing, shopping list, carpooling) may
//! be created under the event.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub start_date: DateTimeUtc,

    pub end_date: DateTimeUtc,

    pub location: String,

    #[sea_orm(nullable)]
    pub cover_photo: Option<String>,

    #[sea_orm(default_value = false)]
    pub is_private: bool,

    #[sea_orm(indexed)]
    pub created_by_id: i32,

    /// Optional owning group; free-standing events have none.
    #[sea_orm(indexed, nullable)]
    pub group_id: Option<i32>,

    #[sea_orm(default_value = true)]
    pub polls_enabled: bool,

    #[sea_orm(default_value = false)]
    pub ticketing_enabled: bool,

    #[sea_orm(default_value = false)]
    pub shopping_list_enabled: bool,

    #[sea_orm(default_value = false)]
    pub carpool_enabled: bool,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedById",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Creator,
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id",
        on_delete = "Cascade"
    )]
    Group,
    #[sea_orm(has_many = "super::event_organizer::Entity")]
    Organizers,
    #[sea_orm(has_many = "super::event_participant::Entity")]
    Participants,
    #[sea_orm(has_many = "super::discussion_thread::Entity")]
    DiscussionThreads,
    #[sea_orm(has_many = "super::photo_album::Entity")]
    Albums,
    #[sea_orm(has_many = "super::poll::Entity")]
    Polls,
    #[sea_orm(has_many = "super::ticket_type::Entity")]
    TicketTypes,
    #[sea_orm(has_many = "super::shopping_item::Entity")]
    ShoppingItems,
    #[sea_orm(has_many = "super::carpool_offer::Entity")]
    CarpoolOffers,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::event_organizer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizers.def()
    }
}

impl Related<super::event_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participants.def()
    }
}

impl Related<super::photo_album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Albums.def()
    }
}

impl Related<super::poll::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Polls.def()
    }
}

impl Related<super::ticket_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
