use super::super::*;

/// Tests that the can_create_events flag grants event creation without admin
/// rights.
///
/// Expected: Ok(())
#[tokio::test]
async fn flagged_member_passes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await.unwrap();
    let member = factory::user::create_user(db).await.unwrap();
    let group = factory::group::create_group(db, owner.id).await.unwrap();
    factory::group::MembershipFactory::new(db, group.id, member.id)
        .can_create_events(true)
        .build()
        .await
        .unwrap();

    let result = AuthGuard::new(db)
        .require(&member, &[Permission::GroupEventCreator(group.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that an admin passes the event-creator check without the flag.
///
/// Expected: Ok(())
#[tokio::test]
async fn admin_passes_without_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user(db).await.unwrap();
    let group = factory::group::create_group(db, admin.id).await.unwrap();
    factory::group::MembershipFactory::new(db, group.id, admin.id)
        .is_admin(true)
        .build()
        .await
        .unwrap();

    let result = AuthGuard::new(db)
        .require(&admin, &[Permission::GroupEventCreator(group.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a plain member without the flag is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn unflagged_member_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await.unwrap();
    let member = factory::user::create_user(db).await.unwrap();
    let group = factory::group::create_group(db, owner.id).await.unwrap();
    factory::group::create_membership(db, group.id, member.id)
        .await
        .unwrap();

    let result = AuthGuard::new(db)
        .require(&member, &[Permission::GroupEventCreator(group.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
