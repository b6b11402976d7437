//! Discussion message entity.
//!
//! Replies form a tree through `parent_id`. A parent must already exist in
//! the same thread before a child can reference it, so the link is acyclic by
//! construction.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub thread_id: i32,

    pub author_id: i32,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    /// Message this one replies to, within the same thread.
    #[sea_orm(nullable)]
    pub parent_id: Option<i32>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discussion_thread::Entity",
        from = "Column::ThreadId",
        to = "super::discussion_thread::Column::Id",
        on_delete = "Cascade"
    )]
    Thread,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,
}

impl Related<super::discussion_thread::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Thread.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
