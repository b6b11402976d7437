use sea_orm_migration::{prelude::*, schema::*};

use super::m20260715_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(pk_auto(Groups::Id))
                    .col(string(Groups::Name))
                    .col(text_null(Groups::Description))
                    .col(string_null(Groups::Icon))
                    .col(string_null(Groups::CoverPhoto))
                    .col(string_len(Groups::GroupType, 20))
                    .col(boolean(Groups::AllowMemberPosts).default(true))
                    .col(boolean(Groups::AllowMemberEvents).default(true))
                    .col(integer(Groups::CreatedById))
                    .col(
                        timestamp(Groups::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_created_by_id")
                            .from(Groups::Table, Groups::CreatedById)
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
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Groups {
    Table,
    Id,
    Name,
    Description,
    Icon,
    CoverPhoto,
    GroupType,
    AllowMemberPosts,
    AllowMemberEvents,
    CreatedById,
    CreatedAt,
}
