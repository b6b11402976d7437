use chrono::{Duration, Utc};

use crate::server::{
    error::AppError,
    model::addon::CreateShoppingItemParams,
    service::shopping::ShoppingService,
};
use test_utils::{builder::TestBuilder, factory};

fn item_params(event_id: i32, owner_id: i32, name: &str) -> CreateShoppingItemParams {
    CreateShoppingItemParams {
        event_id,
        owner_id,
        name: name.to_string(),
        quantity: 2,
        arrival_time: Utc::now() + Duration::days(3),
    }
}

/// Tests the feature-flag gate on shopping items.
///
/// Expected: Err(PreconditionFailed) when the list is disabled
#[tokio::test]
async fn create_requires_shopping_list_enabled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_addon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let event = factory::event::create_event(db, user.id).await.unwrap();

    let result = ShoppingService::new(db)
        .create(item_params(event.id, user.id, "Napkins"))
        .await;

    assert!(matches!(result, Err(AppError::PreconditionFailed(_))));

    Ok(())
}

/// Tests that a duplicate item name within the event is rejected.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn create_rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_addon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let event = factory::event::EventFactory::new(db, user.id)
        .shopping_list_enabled(true)
        .build()
        .await
        .unwrap();

    let service = ShoppingService::new(db);

    service.create(item_params(event.id, user.id, "Napkins")).await?;
    let result = service.create(item_params(event.id, user.id, "Napkins")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
