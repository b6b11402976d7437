use super::super::*;

use test_utils::factory::helpers::create_event_with_organizer;

/// Tests that both participants and organizers satisfy the event-access
/// check.
///
/// Expected: Ok(()) for both
#[tokio::test]
async fn participant_and_organizer_pass() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, event) = create_event_with_organizer(db).await.unwrap();
    let attendee = factory::user::create_user(db).await.unwrap();
    factory::participation::create_participant(db, event.id, attendee.id)
        .await
        .unwrap();

    let guard = AuthGuard::new(db);

    assert!(guard
        .require(&organizer, &[Permission::EventAccess(event.id)])
        .await
        .is_ok());
    assert!(guard
        .require(&attendee, &[Permission::EventAccess(event.id)])
        .await
        .is_ok());

    Ok(())
}

/// Tests that a user with no link to the event is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn outsider_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, event) = create_event_with_organizer(db).await.unwrap();
    let outsider = factory::user::create_user(db).await.unwrap();

    let result = AuthGuard::new(db)
        .require(&outsider, &[Permission::EventAccess(event.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
