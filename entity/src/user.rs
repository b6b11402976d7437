//! User account entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Login identifier, unique across all accounts.
    #[sea_orm(unique, indexed)]
    pub email: String,

    pub full_name: String,

    /// Argon2 hash of the account password. The plain password is never
    /// persisted.
    pub password_hash: String,

    #[sea_orm(default_value = true)]
    pub is_active: bool,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::group_membership::Entity")]
    GroupMemberships,
    #[sea_orm(has_many = "super::event_organizer::Entity")]
    OrganizedEvents,
    #[sea_orm(has_many = "super::event_participant::Entity")]
    EventParticipations,
    #[sea_orm(has_many = "super::poll_vote::Entity")]
    PollVotes,
}

impl Related<super::group_membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupMemberships.def()
    }
}

impl Related<super::event_organizer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrganizedEvents.def()
    }
}

impl Related<super::event_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventParticipations.def()
    }
}

impl Related<super::poll_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PollVotes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
