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
                    .table(EventOrganizers::Table)
                    .if_not_exists()
                    .col(pk_auto(EventOrganizers::Id))
                    .col(integer(EventOrganizers::EventId))
                    .col(integer(EventOrganizers::UserId))
                    .col(
                        timestamp(EventOrganizers::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_organizer_event_id")
                            .from(EventOrganizers::Table, EventOrganizers::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_organizer_user_id")
                            .from(EventOrganizers::Table, EventOrganizers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_event_organizer_unique")
                            .col(EventOrganizers::EventId)
                            .col(EventOrganizers::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventOrganizers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventOrganizers {
    Table,
    Id,
    EventId,
    UserId,
    CreatedAt,
}
