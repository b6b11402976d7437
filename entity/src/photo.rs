//! Photo entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "photos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub album_id: i32,

    pub uploaded_by_id: i32,

    pub url: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::photo_album::Entity",
        from = "Column::AlbumId",
        to = "super::photo_album::Column::Id",
        on_delete = "Cascade"
    )]
    Album,
    #[sea_orm(has_many = "super::photo_comment::Entity")]
    Comments,
}

impl Related<super::photo_album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Album.def()
    }
}

impl Related<super::photo_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
