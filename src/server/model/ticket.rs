//! Ticketing domain models and parameters.

use crate::model::ticket::{CreateTicketTypeDto, PurchaseTicketDto};

#[derive(Debug, Clone)]
pub struct CreateTicketTypeParams {
    pub event_id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl CreateTicketTypeParams {
    pub fn from_dto(event_id: i32, dto: CreateTicketTypeDto) -> Self {
        Self {
            event_id,
            name: dto.name,
            price: dto.price,
            quantity: dto.quantity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PurchaseTicketParams {
    pub purchaser_first_name: String,
    pub purchaser_last_name: String,
    pub purchaser_email: String,
    pub purchaser_address: Option<String>,
}

impl PurchaseTicketParams {
    pub fn from_dto(dto: PurchaseTicketDto) -> Self {
        Self {
            purchaser_first_name: dto.purchaser_first_name,
            purchaser_last_name: dto.purchaser_last_name,
            purchaser_email: dto.purchaser_email,
            purchaser_address: dto.purchaser_address,
        }
    }
}

/// Result of a purchase attempt. Business-rule rejections are represented as
/// values so the repository's error type stays database-only.
#[derive(Debug, Clone)]
pub enum PurchaseOutcome {
    Purchased(entity::ticket::Model),
    /// Sold count already reached the type's quota.
    QuotaExhausted,
    /// This email already holds a ticket of this type.
    AlreadyPurchased,
}
