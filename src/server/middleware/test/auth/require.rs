use super::*;

mod event_access;
mod event_organizer;
mod group_admin;
mod group_event_creator;
mod group_member;

/// Tests that an empty permission list grants access to any authenticated
/// user.
///
/// Expected: Ok(())
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();

    let result = AuthGuard::new(db).require(&user, &[]).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that every listed permission must hold.
///
/// The user is a member of the group but not an organizer of the event, so
/// the combined check fails.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let group = factory::group::create_group(db, user.id).await.unwrap();
    factory::group::create_membership(db, group.id, user.id)
        .await
        .unwrap();
    let event = factory::event::create_event(db, user.id).await.unwrap();

    let result = AuthGuard::new(db)
        .require(
            &user,
            &[
                Permission::GroupMember(group.id),
                Permission::EventOrganizer(event.id),
            ],
        )
        .await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, user.id);
            assert!(msg.contains("Organizer"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
