//! Shopping list and carpool domain parameters.

use chrono::{DateTime, Utc};

use crate::model::addon::{
    CreateCarpoolOfferDto, CreateShoppingItemDto, UpdateCarpoolOfferDto, UpdateShoppingItemDto,
};

#[derive(Debug, Clone)]
pub struct CreateShoppingItemParams {
    pub event_id: i32,
    pub owner_id: i32,
    pub name: String,
    pub quantity: i32,
    pub arrival_time: DateTime<Utc>,
}

impl CreateShoppingItemParams {
    pub fn from_dto(event_id: i32, owner_id: i32, dto: CreateShoppingItemDto) -> Self {
        Self {
            event_id,
            owner_id,
            name: dto.name,
            quantity: dto.quantity,
            arrival_time: dto.arrival_time,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateShoppingItemParams {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub arrival_time: Option<DateTime<Utc>>,
}

impl UpdateShoppingItemParams {
    pub fn from_dto(dto: UpdateShoppingItemDto) -> Self {
        Self {
            name: dto.name,
            quantity: dto.quantity,
            arrival_time: dto.arrival_time,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCarpoolOfferParams {
    pub event_id: i32,
    pub driver_id: i32,
    pub departure_location: String,
    pub departure_time: DateTime<Utc>,
    pub price: f64,
    pub available_seats: i32,
    pub max_detour_minutes: i32,
}

impl CreateCarpoolOfferParams {
    pub fn from_dto(event_id: i32, driver_id: i32, dto: CreateCarpoolOfferDto) -> Self {
        Self {
            event_id,
            driver_id,
            departure_location: dto.departure_location,
            departure_time: dto.departure_time,
            price: dto.price,
            available_seats: dto.available_seats,
            max_detour_minutes: dto.max_detour_minutes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCarpoolOfferParams {
    pub departure_location: Option<String>,
    pub departure_time: Option<DateTime<Utc>>,
    pub price: Option<f64>,
    pub available_seats: Option<i32>,
    pub max_detour_minutes: Option<i32>,
}

impl UpdateCarpoolOfferParams {
    pub fn from_dto(dto: UpdateCarpoolOfferDto) -> Self {
        Self {
            departure_location: dto.departure_location,
            departure_time: dto.departure_time,
            price: dto.price,
            available_seats: dto.available_seats,
            max_detour_minutes: dto.max_detour_minutes,
        }
    }
}
