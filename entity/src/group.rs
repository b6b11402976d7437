//! Group entity - a community of users that can host events and discussions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Visibility policy of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    /// Listed and joinable by anyone.
    #[sea_orm(string_value = "public")]
    Public,
    /// Listed, membership granted by an admin.
    #[sea_orm(string_value = "private")]
    Private,
    /// Unlisted, invitation only.
    #[sea_orm(string_value = "secret")]
    Secret,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(nullable)]
    pub icon: Option<String>,

    #[sea_orm(nullable)]
    pub cover_photo: Option<String>,

    pub group_type: GroupType,

    /// Whether non-admin members may open discussion threads.
    #[sea_orm(default_value = true)]
    pub allow_member_posts: bool,

    /// Whether non-admin members may be granted event creation.
    #[sea_orm(default_value = true)]
    pub allow_member_events: bool,

    #[sea_orm(indexed)]
    pub created_by_id: i32,

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
    #[sea_orm(has_many = "super::group_membership::Entity")]
    Memberships,
    #[sea_orm(has_many = "super::event::Entity")]
    Events,
    #[sea_orm(has_many = "super::discussion_thread::Entity")]
    DiscussionThreads,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::group_membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Memberships.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
