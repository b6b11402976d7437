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
                    .table(EventParticipants::Table)
                    .if_not_exists()
                    .col(pk_auto(EventParticipants::Id))
                    .col(integer(EventParticipants::EventId))
                    .col(integer(EventParticipants::UserId))
                    .col(
                        timestamp(EventParticipants::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_participant_event_id")
                            .from(EventParticipants::Table, EventParticipants::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_participant_user_id")
                            .from(EventParticipants::Table, EventParticipants::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_event_participant_unique")
                            .col(EventParticipants::EventId)
                            .col(EventParticipants::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventParticipants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventParticipants {
    Table,
    Id,
    EventId,
    UserId,
    JoinedAt,
}
