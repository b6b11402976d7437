use super::*;

/// Tests promoting a member to admin while leaving the other flag alone.
///
/// Expected: Ok with is_admin set and can_create_events unchanged
#[tokio::test]
async fn updates_role_flags_partially() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_admin, group) = create_group_with_admin(db).await?;
    let user = factory::user::create_user(db).await?;
    let membership = factory::group::create_membership(db, group.id, user.id).await?;

    let repo = MembershipRepository::new(db);
    let updated = repo
        .update(
            membership,
            UpdateMemberParams {
                is_admin: Some(true),
                can_create_events: None,
            },
        )
        .await?;

    assert!(updated.is_admin);
    assert!(!updated.can_create_events);

    Ok(())
}
