use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260715_000001_create_users_table::Users,
    m20260718_000009_create_photo_albums_table::PhotoAlbums,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Photos::Table)
                    .if_not_exists()
                    .col(pk_auto(Photos::Id))
                    .col(integer(Photos::AlbumId))
                    .col(integer(Photos::UploadedById))
                    .col(string(Photos::Url))
                    .col(text_null(Photos::Caption))
                    .col(
                        timestamp(Photos::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_album_id")
                            .from(Photos::Table, Photos::AlbumId)
                            .to(PhotoAlbums::Table, PhotoAlbums::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_uploaded_by_id")
                            .from(Photos::Table, Photos::UploadedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Photos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Photos {
    Table,
    Id,
    AlbumId,
    UploadedById,
    Url,
    Caption,
    CreatedAt,
}
