//! Organizer and participant link factories.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links a user to an event as organizer.
pub async fn create_organizer(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_organizer::Model, DbErr> {
    entity::event_organizer::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a user to an event as participant.
pub async fn create_participant(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_participant::Model, DbErr> {
    entity::event_participant::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        joined_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
