use crate::server::{
    error::AppError,
    model::group::AddMemberParams,
    service::group::GroupService,
};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_group_with_admin};

/// Tests that adding a member twice is rejected on the second attempt.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn add_member_rejects_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_admin, group) = create_group_with_admin(db).await.unwrap();
    let user = factory::user::create_user(db).await.unwrap();

    let service = GroupService::new(db);
    let params = AddMemberParams {
        group_id: group.id,
        user_id: user.id,
        is_admin: false,
        can_create_events: false,
    };

    service.add_member(params.clone()).await?;
    let result = service.add_member(params).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that adding a nonexistent user is a not-found, not a conflict.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn add_member_rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_admin, group) = create_group_with_admin(db).await.unwrap();

    let result = GroupService::new(db)
        .add_member(AddMemberParams {
            group_id: group.id,
            user_id: 9999,
            is_admin: false,
            can_create_events: false,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that updating a missing membership is a not-found.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn update_member_requires_existing_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_admin, group) = create_group_with_admin(db).await.unwrap();
    let stranger = factory::user::create_user(db).await.unwrap();

    let result = GroupService::new(db)
        .update_member(
            group.id,
            stranger.id,
            crate::server::model::group::UpdateMemberParams {
                is_admin: Some(true),
                can_create_events: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
