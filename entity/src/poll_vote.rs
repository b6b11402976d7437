//! Poll vote entity.
//!
//! At most one row per (question, voter); the unique index lets re-votes be
//! applied as an atomic upsert rather than a read-then-write.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "poll_votes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub question_id: i32,

    #[sea_orm(indexed)]
    pub option_id: i32,

    #[sea_orm(indexed)]
    pub voter_id: i32,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::poll_question::Entity",
        from = "Column::QuestionId",
        to = "super::poll_question::Column::Id",
        on_delete = "Cascade"
    )]
    Question,
    #[sea_orm(
        belongs_to = "super::poll_option::Entity",
        from = "Column::OptionId",
        to = "super::poll_option::Column::Id",
        on_delete = "Cascade"
    )]
    Option,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::VoterId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Voter,
}

impl Related<super::poll_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl Related<super::poll_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Option.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Voter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
