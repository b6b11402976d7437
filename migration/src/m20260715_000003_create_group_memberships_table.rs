use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260715_000001_create_users_table::Users, m20260715_000002_create_groups_table::Groups,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupMemberships::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupMemberships::Id))
                    .col(integer(GroupMemberships::GroupId))
                    .col(integer(GroupMemberships::UserId))
                    .col(boolean(GroupMemberships::IsAdmin).default(false))
                    .col(boolean(GroupMemberships::CanCreateEvents).default(false))
                    .col(
                        timestamp(GroupMemberships::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_membership_group_id")
                            .from(GroupMemberships::Table, GroupMemberships::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_membership_user_id")
                            .from(GroupMemberships::Table, GroupMemberships::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_group_membership_unique")
                            .col(GroupMemberships::GroupId)
                            .col(GroupMemberships::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupMemberships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupMemberships {
    Table,
    Id,
    GroupId,
    UserId,
    IsAdmin,
    CanCreateEvents,
    CreatedAt,
}
