use super::super::*;

/// Tests that an admin membership satisfies the group-admin check.
///
/// Expected: Ok(())
#[tokio::test]
async fn admin_passes() -> Result<(), AppError> {
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
        .require(&admin, &[Permission::GroupAdmin(group.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a plain member fails the group-admin check.
///
/// Expected: Err(AuthError::AccessDenied) naming administrator privileges
#[tokio::test]
async fn plain_member_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await.unwrap();
    let member = factory::user::create_user(db).await.unwrap();
    let group = factory::group::create_group(db, owner.id).await.unwrap();
    factory::group::create_membership(db, group.id, member.id)
        .await
        .unwrap();

    let result = AuthGuard::new(db)
        .require(&member, &[Permission::GroupAdmin(group.id)])
        .await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, member.id);
            assert!(msg.contains("Administrator"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
