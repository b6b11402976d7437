use super::*;

/// Tests adding a member with explicit role flags.
///
/// Expected: Ok with the flags persisted
#[tokio::test]
async fn adds_member_with_role_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_admin, group) = create_group_with_admin(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = MembershipRepository::new(db);
    let membership = repo
        .add(AddMemberParams {
            group_id: group.id,
            user_id: user.id,
            is_admin: false,
            can_create_events: true,
        })
        .await?;

    assert_eq!(membership.group_id, group.id);
    assert_eq!(membership.user_id, user.id);
    assert!(!membership.is_admin);
    assert!(membership.can_create_events);

    Ok(())
}

/// Tests that the (group, user) unique key rejects a second membership.
///
/// Expected: Err(unique violation) on the second insert
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_admin, group) = create_group_with_admin(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = MembershipRepository::new(db);
    let params = AddMemberParams {
        group_id: group.id,
        user_id: user.id,
        is_admin: false,
        can_create_events: false,
    };

    repo.add(params.clone()).await?;
    let result = repo.add(params).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
