use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::server::model::addon::{CreateCarpoolOfferParams, UpdateCarpoolOfferParams};

pub struct CarpoolRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarpoolRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateCarpoolOfferParams,
    ) -> Result<entity::carpool_offer::Model, DbErr> {
        entity::carpool_offer::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            driver_id: ActiveValue::Set(params.driver_id),
            departure_location: ActiveValue::Set(params.departure_location),
            departure_time: ActiveValue::Set(params.departure_time),
            price: ActiveValue::Set(params.price),
            available_seats: ActiveValue::Set(params.available_seats),
            max_detour_minutes: ActiveValue::Set(params.max_detour_minutes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::carpool_offer::Model>, DbErr> {
        entity::prelude::CarpoolOffer::find_by_id(id).one(self.db).await
    }

    pub async fn get_for_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::carpool_offer::Model>, DbErr> {
        entity::prelude::CarpoolOffer::find()
            .filter(entity::carpool_offer::Column::EventId.eq(event_id))
            .order_by_asc(entity::carpool_offer::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        offer: entity::carpool_offer::Model,
        params: UpdateCarpoolOfferParams,
    ) -> Result<entity::carpool_offer::Model, DbErr> {
        let mut active_model: entity::carpool_offer::ActiveModel = offer.into();

        if let Some(departure_location) = params.departure_location {
            active_model.departure_location = ActiveValue::Set(departure_location);
        }
        if let Some(departure_time) = params.departure_time {
            active_model.departure_time = ActiveValue::Set(departure_time);
        }
        if let Some(price) = params.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(available_seats) = params.available_seats {
            active_model.available_seats = ActiveValue::Set(available_seats);
        }
        if let Some(max_detour_minutes) = params.max_detour_minutes {
            active_model.max_detour_minutes = ActiveValue::Set(max_detour_minutes);
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, offer: entity::carpool_offer::Model) -> Result<(), DbErr> {
        offer.delete(self.db).await?;

        Ok(())
    }
}
