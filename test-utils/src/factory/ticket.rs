//! Ticket type factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ticket types with customizable fields.
pub struct TicketTypeFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    name: String,
    price: f64,
    quantity: i32,
}

impl<'a> TicketTypeFactory<'a> {
    /// Defaults: `"Ticket {id}"`, free, quota of 100.
    pub fn new(db: &'a DatabaseConnection, event_id: i32) -> Self {
        Self {
            db,
            event_id,
            name: format!("Ticket {}", next_id()),
            price: 0.0,
            quantity: 100,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub async fn build(self) -> Result<entity::ticket_type::Model, DbErr> {
        entity::ticket_type::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            quantity: ActiveValue::Set(self.quantity),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ticket type with the given quota.
pub async fn create_ticket_type(
    db: &DatabaseConnection,
    event_id: i32,
    quantity: i32,
) -> Result<entity::ticket_type::Model, DbErr> {
    TicketTypeFactory::new(db, event_id)
        .quantity(quantity)
        .build()
        .await
}
