use chrono::{Duration, Utc};

use crate::server::{
    error::AppError,
    model::event::{CreateEventParams, UpdateEventParams},
    service::event::EventService,
};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_event_with_organizer};

fn create_params(created_by_id: i32) -> CreateEventParams {
    let start = Utc::now() + Duration::days(5);
    CreateEventParams {
        name: "Launch Event".to_string(),
        description: None,
        start_date: start,
        end_date: start + Duration::hours(4),
        location: "Paris HQ".to_string(),
        cover_photo: None,
        is_private: false,
        created_by_id,
        group_id: None,
        polls_enabled: true,
        ticketing_enabled: false,
        shopping_list_enabled: false,
        carpool_enabled: false,
        organizer_ids: vec![created_by_id],
    }
}

/// Tests that an event ending before it starts is rejected.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn create_rejects_unordered_dates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();

    let mut params = create_params(user.id);
    params.end_date = params.start_date - Duration::hours(1);

    let result = EventService::new(db).create(params).await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that an unknown organizer id aborts creation.
///
/// Expected: Err(NotFound), and no event is persisted
#[tokio::test]
async fn create_rejects_unknown_organizer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();

    let mut params = create_params(user.id);
    params.organizer_ids.push(9999);

    let service = EventService::new(db);
    let result = service.create(params).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests that a partial update cannot leave the date pair unordered.
///
/// Expected: Err(Validation) when the new end lands before the stored start
#[tokio::test]
async fn update_revalidates_date_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, event) = create_event_with_organizer(db).await.unwrap();

    let result = EventService::new(db)
        .update(
            event.id,
            UpdateEventParams {
                name: None,
                description: None,
                start_date: None,
                end_date: Some(event.start_date - Duration::hours(1)),
                location: None,
                cover_photo: None,
                is_private: None,
                polls_enabled: None,
                ticketing_enabled: None,
                shopping_list_enabled: None,
                carpool_enabled: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that joining an event twice is rejected on the second attempt.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn add_participant_rejects_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, event) = create_event_with_organizer(db).await.unwrap();
    let attendee = factory::user::create_user(db).await.unwrap();

    let service = EventService::new(db);

    service.add_participant(event.id, attendee.id).await?;
    let result = service.add_participant(event.id, attendee.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that adding an organizer twice is rejected on the second attempt.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn add_organizer_rejects_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, event) = create_event_with_organizer(db).await.unwrap();

    let result = EventService::new(db)
        .add_organizer(event.id, organizer.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
