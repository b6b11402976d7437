use super::super::*;

/// Tests that any membership satisfies the group-member check.
///
/// Expected: Ok(())
#[tokio::test]
async fn member_passes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await.unwrap();
    let member = factory::user::create_user(db).await.unwrap();
    let group = factory::group::create_group(db, owner.id).await.unwrap();
    factory::group::create_membership(db, group.id, member.id)
        .await
        .unwrap();

    let result = AuthGuard::new(db)
        .require(&member, &[Permission::GroupMember(group.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a non-member is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn non_member_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await.unwrap();
    let outsider = factory::user::create_user(db).await.unwrap();
    let group = factory::group::create_group(db, owner.id).await.unwrap();

    let result = AuthGuard::new(db)
        .require(&outsider, &[Permission::GroupMember(group.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
