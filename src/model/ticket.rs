use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateTicketTypeDto {
    pub name: String,
    pub price: f64,
    /// Sales quota for this type.
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketTypeDto {
    pub id: i32,
    pub event_id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl From<entity::ticket_type::Model> for TicketTypeDto {
    fn from(ticket_type: entity::ticket_type::Model) -> Self {
        Self {
            id: ticket_type.id,
            event_id: ticket_type.event_id,
            name: ticket_type.name,
            price: ticket_type.price,
            quantity: ticket_type.quantity,
            created_at: ticket_type.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct PurchaseTicketDto {
    pub purchaser_first_name: String,
    pub purchaser_last_name: String,
    pub purchaser_email: String,
    #[serde(default)]
    pub purchaser_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketDto {
    pub id: i32,
    pub ticket_type_id: i32,
    pub purchaser_first_name: String,
    pub purchaser_last_name: String,
    pub purchaser_email: String,
    pub purchaser_address: Option<String>,
    pub purchased_at: DateTime<Utc>,
}

impl From<entity::ticket::Model> for TicketDto {
    fn from(ticket: entity::ticket::Model) -> Self {
        Self {
            id: ticket.id,
            ticket_type_id: ticket.ticket_type_id,
            purchaser_first_name: ticket.purchaser_first_name,
            purchaser_last_name: ticket.purchaser_last_name,
            purchaser_email: ticket.purchaser_email,
            purchaser_address: ticket.purchaser_address,
            purchased_at: ticket.purchased_at,
        }
    }
}
