//! Shopping list item factory.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a shopping item owned by the given user.
pub async fn create_shopping_item(
    db: &DatabaseConnection,
    event_id: i32,
    owner_id: i32,
) -> Result<entity::shopping_item::Model, DbErr> {
    entity::shopping_item::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        owner_id: ActiveValue::Set(owner_id),
        name: ActiveValue::Set(format!("Item {}", next_id())),
        quantity: ActiveValue::Set(1),
        arrival_time: ActiveValue::Set(Utc::now() + Duration::days(7)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
