use sea_orm_migration::{prelude::*, schema::*};

use super::m20260720_000016_create_ticket_types_table::TicketTypes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(pk_auto(Tickets::Id))
                    .col(integer(Tickets::TicketTypeId))
                    .col(string(Tickets::PurchaserFirstName))
                    .col(string(Tickets::PurchaserLastName))
                    .col(string(Tickets::PurchaserEmail))
                    .col(string_null(Tickets::PurchaserAddress))
                    .col(
                        timestamp(Tickets::PurchasedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_ticket_type_id")
                            .from(Tickets::Table, Tickets::TicketTypeId)
                            .to(TicketTypes::Table, TicketTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // One ticket per attendee email per type.
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_ticket_type_email_unique")
                            .col(Tickets::TicketTypeId)
                            .col(Tickets::PurchaserEmail),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tickets {
    Table,
    Id,
    TicketTypeId,
    PurchaserFirstName,
    PurchaserLastName,
    PurchaserEmail,
    PurchaserAddress,
    PurchasedAt,
}
