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
                    .table(CarpoolOffers::Table)
                    .if_not_exists()
                    .col(pk_auto(CarpoolOffers::Id))
                    .col(integer(CarpoolOffers::EventId))
                    .col(integer(CarpoolOffers::DriverId))
                    .col(string(CarpoolOffers::DepartureLocation))
                    .col(timestamp(CarpoolOffers::DepartureTime))
                    .col(double(CarpoolOffers::Price))
                    .col(integer(CarpoolOffers::AvailableSeats))
                    .col(integer(CarpoolOffers::MaxDetourMinutes))
                    .col(
                        timestamp(CarpoolOffers::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_carpool_offer_event_id")
                            .from(CarpoolOffers::Table, CarpoolOffers::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_carpool_offer_driver_id")
                            .from(CarpoolOffers::Table, CarpoolOffers::DriverId)
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
            .drop_table(Table::drop().table(CarpoolOffers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CarpoolOffers {
    Table,
    Id,
    EventId,
    DriverId,
    DepartureLocation,
    DepartureTime,
    Price,
    AvailableSeats,
    MaxDetourMinutes,
    CreatedAt,
}
