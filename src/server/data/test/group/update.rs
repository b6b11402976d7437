use super::*;

/// Tests that a partial update only touches the provided fields.
///
/// Expected: Ok with the name changed and the rest untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo.create(create_params(user.id)).await?;

    let updated = repo
        .update(
            group.clone(),
            UpdateGroupParams {
                name: Some("Trail Runners".to_string()),
                description: None,
                icon: None,
                cover_photo: None,
                group_type: None,
                allow_member_posts: Some(false),
                allow_member_events: None,
            },
        )
        .await?;

    assert_eq!(updated.name, "Trail Runners");
    assert!(!updated.allow_member_posts);
    assert_eq!(updated.group_type, group.group_type);
    assert!(updated.allow_member_events);

    Ok(())
}
