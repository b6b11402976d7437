//! Carpool offer factory.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a carpool offer driven by the given user.
pub async fn create_carpool_offer(
    db: &DatabaseConnection,
    event_id: i32,
    driver_id: i32,
) -> Result<entity::carpool_offer::Model, DbErr> {
    entity::carpool_offer::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        driver_id: ActiveValue::Set(driver_id),
        departure_location: ActiveValue::Set(format!("Meeting point {}", next_id())),
        departure_time: ActiveValue::Set(Utc::now() + Duration::days(7)),
        price: ActiveValue::Set(0.0),
        available_seats: ActiveValue::Set(3),
        max_detour_minutes: ActiveValue::Set(15),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
