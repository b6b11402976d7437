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
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(string(Events::Name))
                    .col(text_null(Events::Description))
                    .col(timestamp(Events::StartDate))
                    .col(timestamp(Events::EndDate))
                    .col(string(Events::Location))
                    .col(string_null(Events::CoverPhoto))
                    .col(boolean(Events::IsPrivate).default(false))
                    .col(integer(Events::CreatedById))
                    .col(integer_null(Events::GroupId))
                    .col(boolean(Events::PollsEnabled).default(true))
                    .col(boolean(Events::TicketingEnabled).default(false))
                    .col(boolean(Events::ShoppingListEnabled).default(false))
                    .col(boolean(Events::CarpoolEnabled).default(false))
                    .col(
                        timestamp(Events::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_created_by_id")
                            .from(Events::Table, Events::CreatedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_group_id")
                            .from(Events::Table, Events::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    Id,
    Name,
    Description,
    StartDate,
    EndDate,
    Location,
    CoverPhoto,
    IsPrivate,
    CreatedById,
    GroupId,
    PollsEnabled,
    TicketingEnabled,
    ShoppingListEnabled,
    CarpoolEnabled,
    CreatedAt,
}
