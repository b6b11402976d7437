use super::*;

/// Tests that creating a group also creates the creator's admin membership.
///
/// Expected: Ok with the group row and one admin membership for the creator
#[tokio::test]
async fn creates_group_with_admin_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo.create(create_params(user.id)).await?;

    assert_eq!(group.name, "Hiking Club");
    assert_eq!(group.created_by_id, user.id);

    let membership = entity::prelude::GroupMembership::find()
        .filter(entity::group_membership::Column::GroupId.eq(group.id))
        .filter(entity::group_membership::Column::UserId.eq(user.id))
        .one(db)
        .await?;

    let membership = membership.expect("creator membership should exist");
    assert!(membership.is_admin);
    assert!(membership.can_create_events);

    Ok(())
}

/// Tests fetching a group with its member rows.
///
/// Expected: Ok(Some) with all memberships included
#[tokio::test]
async fn gets_group_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user(db).await?;
    let member = factory::user::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo.create(create_params(admin.id)).await?;
    factory::group::create_membership(db, group.id, member.id).await?;

    let detail = repo.get_with_members(group.id).await?.unwrap();

    assert_eq!(detail.group.id, group.id);
    assert_eq!(detail.members.len(), 2);

    Ok(())
}
