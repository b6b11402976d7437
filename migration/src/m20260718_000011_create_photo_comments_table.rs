use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260715_000001_create_users_table::Users, m20260718_000010_create_photos_table::Photos,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhotoComments::Table)
                    .if_not_exists()
                    .col(pk_auto(PhotoComments::Id))
                    .col(integer(PhotoComments::PhotoId))
                    .col(integer(PhotoComments::AuthorId))
                    .col(text(PhotoComments::Content))
                    .col(
                        timestamp(PhotoComments::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_comment_photo_id")
                            .from(PhotoComments::Table, PhotoComments::PhotoId)
                            .to(Photos::Table, Photos::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_comment_author_id")
                            .from(PhotoComments::Table, PhotoComments::AuthorId)
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
            .drop_table(Table::drop().table(PhotoComments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PhotoComments {
    Table,
    Id,
    PhotoId,
    AuthorId,
    Content,
    CreatedAt,
}
