use sea_orm_migration::{prelude::*, schema::*};

use super::m20260716_000004_create_events_table::Events;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketTypes::Id))
                    .col(integer(TicketTypes::EventId))
                    .col(string(TicketTypes::Name))
                    .col(double(TicketTypes::Price))
                    .col(integer(TicketTypes::Quantity))
                    .col(
                        timestamp(TicketTypes::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_type_event_id")
                            .from(TicketTypes::Table, TicketTypes::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketTypes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketTypes {
    Table,
    Id,
    EventId,
    Name,
    Price,
    Quantity,
    CreatedAt,
}
