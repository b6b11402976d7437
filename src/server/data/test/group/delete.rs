use super::*;

/// Tests that deleting a group removes its membership rows through the
/// cascade.
///
/// Expected: Ok with no memberships left for the group
#[tokio::test]
async fn delete_cascades_to_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user(db).await?;
    let member = factory::user::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo.create(create_params(admin.id)).await?;
    factory::group::create_membership(db, group.id, member.id).await?;

    repo.delete(group.id).await?;

    assert!(repo.find_by_id(group.id).await?.is_none());

    let remaining = entity::prelude::GroupMembership::find()
        .filter(entity::group_membership::Column::GroupId.eq(group.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    Ok(())
}
