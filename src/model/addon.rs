use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateShoppingItemDto {
    pub name: String,
    pub quantity: i32,
    /// When the owner expects to arrive with the item.
    pub arrival_time: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateShoppingItemDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub arrival_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShoppingItemDto {
    pub id: i32,
    pub event_id: i32,
    pub owner_id: i32,
    pub name: String,
    pub quantity: i32,
    pub arrival_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::shopping_item::Model> for ShoppingItemDto {
    fn from(item: entity::shopping_item::Model) -> Self {
        Self {
            id: item.id,
            event_id: item.event_id,
            owner_id: item.owner_id,
            name: item.name,
            quantity: item.quantity,
            arrival_time: item.arrival_time,
            created_at: item.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateCarpoolOfferDto {
    pub departure_location: String,
    pub departure_time: DateTime<Utc>,
    pub price: f64,
    pub available_seats: i32,
    pub max_detour_minutes: i32,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateCarpoolOfferDto {
    #[serde(default)]
    pub departure_location: Option<String>,
    #[serde(default)]
    pub departure_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub available_seats: Option<i32>,
    #[serde(default)]
    pub max_detour_minutes: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CarpoolOfferDto {
    pub id: i32,
    pub event_id: i32,
    pub driver_id: i32,
    pub departure_location: String,
    pub departure_time: DateTime<Utc>,
    pub price: f64,
    pub available_seats: i32,
    pub max_detour_minutes: i32,
    pub created_at: DateTime<Utc>,
}

impl From<entity::carpool_offer::Model> for CarpoolOfferDto {
    fn from(offer: entity::carpool_offer::Model) -> Self {
        Self {
            id: offer.id,
            event_id: offer.event_id,
            driver_id: offer.driver_id,
            departure_location: offer.departure_location,
            departure_time: offer.departure_time,
            price: offer.price,
            available_seats: offer.available_seats,
            max_detour_minutes: offer.max_detour_minutes,
            created_at: offer.created_at,
        }
    }
}
