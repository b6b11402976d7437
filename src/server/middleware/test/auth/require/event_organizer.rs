use super::super::*;

use test_utils::factory::helpers::create_event_with_organizer;

/// Tests that an organizer link satisfies the organizer check.
///
/// Expected: Ok(())
#[tokio::test]
async fn organizer_passes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, event) = create_event_with_organizer(db).await.unwrap();

    let result = AuthGuard::new(db)
        .require(&organizer, &[Permission::EventOrganizer(event.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a plain participant fails the organizer check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn participant_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, event) = create_event_with_organizer(db).await.unwrap();
    let attendee = factory::user::create_user(db).await.unwrap();
    factory::participation::create_participant(db, event.id, attendee.id)
        .await
        .unwrap();

    let result = AuthGuard::new(db)
        .require(&attendee, &[Permission::EventOrganizer(event.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
