use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260715_000001_create_users_table::Users, m20260716_000004_create_events_table::Events,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhotoAlbums::Table)
                    .if_not_exists()
                    .col(pk_auto(PhotoAlbums::Id))
                    .col(string(PhotoAlbums::Name))
                    .col(integer(PhotoAlbums::EventId))
                    .col(integer(PhotoAlbums::CreatedById))
                    .col(
                        timestamp(PhotoAlbums::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_album_event_id")
                            .from(PhotoAlbums::Table, PhotoAlbums::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_album_created_by_id")
                            .from(PhotoAlbums::Table, PhotoAlbums::CreatedById)
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
            .drop_table(Table::drop().table(PhotoAlbums::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PhotoAlbums {
    Table,
    Id,
    Name,
    EventId,
    CreatedById,
    CreatedAt,
}
