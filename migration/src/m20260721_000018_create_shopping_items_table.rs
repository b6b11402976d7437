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
                    .table(ShoppingItems::Table)
                    .if_not_exists()
                    .col(pk_auto(ShoppingItems::Id))
                    .col(integer(ShoppingItems::EventId))
                    .col(integer(ShoppingItems::OwnerId))
                    .col(string(ShoppingItems::Name))
                    .col(integer(ShoppingItems::Quantity))
                    .col(timestamp(ShoppingItems::ArrivalTime))
                    .col(
                        timestamp(ShoppingItems::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shopping_item_event_id")
                            .from(ShoppingItems::Table, ShoppingItems::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shopping_item_owner_id")
                            .from(ShoppingItems::Table, ShoppingItems::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_shopping_item_name_unique")
                            .col(ShoppingItems::EventId)
                            .col(ShoppingItems::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShoppingItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShoppingItems {
    Table,
    Id,
    EventId,
    OwnerId,
    Name,
    Quantity,
    ArrivalTime,
    CreatedAt,
}
