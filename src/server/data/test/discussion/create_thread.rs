use super::*;

/// Tests that a group-scoped thread stores the group id and no event id.
///
/// Expected: Ok with context = group
#[tokio::test]
async fn creates_group_scoped_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_discussion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let group = factory::group::create_group(db, user.id).await?;

    let repo = DiscussionRepository::new(db);
    let thread = repo
        .create_thread(CreateThreadParams {
            title: "Welcome".to_string(),
            scope: ThreadScope::Group(group.id),
            created_by_id: user.id,
        })
        .await?;

    assert_eq!(
        thread.context,
        entity::discussion_thread::ThreadContext::Group
    );
    assert_eq!(thread.group_id, Some(group.id));
    assert_eq!(thread.event_id, None);

    Ok(())
}

/// Tests that an event-scoped thread stores the event id and no group id.
///
/// Expected: Ok with context = event
#[tokio::test]
async fn creates_event_scoped_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_discussion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await?;

    let repo = DiscussionRepository::new(db);
    let thread = repo
        .create_thread(CreateThreadParams {
            title: "Logistics".to_string(),
            scope: ThreadScope::Event(event.id),
            created_by_id: user.id,
        })
        .await?;

    assert_eq!(
        thread.context,
        entity::discussion_thread::ThreadContext::Event
    );
    assert_eq!(thread.group_id, None);
    assert_eq!(thread.event_id, Some(event.id));

    Ok(())
}
