use sea_orm::DatabaseConnection;

use crate::server::{
    data::{carpool::CarpoolRepository, event::EventRepository},
    error::AppError,
    model::addon::{CreateCarpoolOfferParams, UpdateCarpoolOfferParams},
};

pub struct CarpoolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarpoolService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up the event and enforces the carpooling feature flag.
    pub async fn require_carpool_event(
        &self,
        event_id: i32,
    ) -> Result<entity::event::Model, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if !event.carpool_enabled {
            return Err(AppError::PreconditionFailed(
                "Carpooling is not enabled for this event".to_string(),
            ));
        }

        Ok(event)
    }

    pub async fn create(
        &self,
        params: CreateCarpoolOfferParams,
    ) -> Result<entity::carpool_offer::Model, AppError> {
        self.require_carpool_event(params.event_id).await?;

        if params.available_seats < 1 {
            return Err(AppError::validation(
                "available_seats",
                "available_seats must be at least 1",
            ));
        }
        if params.price < 0.0 {
            return Err(AppError::validation("price", "price must not be negative"));
        }
        if params.max_detour_minutes < 0 {
            return Err(AppError::validation(
                "max_detour_minutes",
                "max_detour_minutes must not be negative",
            ));
        }

        Ok(CarpoolRepository::new(self.db).create(params).await?)
    }

    pub async fn list_for_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::carpool_offer::Model>, AppError> {
        self.require_carpool_event(event_id).await?;

        Ok(CarpoolRepository::new(self.db)
            .get_for_event(event_id)
            .await?)
    }

    pub async fn get_offer(&self, offer_id: i32) -> Result<entity::carpool_offer::Model, AppError> {
        CarpoolRepository::new(self.db)
            .find_by_id(offer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Carpool offer not found".to_string()))
    }

    pub async fn update_offer(
        &self,
        offer: entity::carpool_offer::Model,
        params: UpdateCarpoolOfferParams,
    ) -> Result<entity::carpool_offer::Model, AppError> {
        if let Some(available_seats) = params.available_seats {
            if available_seats < 1 {
                return Err(AppError::validation(
                    "available_seats",
                    "available_seats must be at least 1",
                ));
            }
        }

        Ok(CarpoolRepository::new(self.db).update(offer, params).await?)
    }

    pub async fn delete_offer(&self, offer: entity::carpool_offer::Model) -> Result<(), AppError> {
        Ok(CarpoolRepository::new(self.db).delete(offer).await?)
    }
}
