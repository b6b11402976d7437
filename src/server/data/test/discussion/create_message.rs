use super::*;

/// Tests posting a top-level message and a reply to it.
///
/// Expected: Ok; messages are returned in id order with the parent link set
#[tokio::test]
async fn creates_message_and_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_discussion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await?;
    let thread = factory::discussion::create_event_thread(db, event.id, user.id).await?;

    let repo = DiscussionRepository::new(db);

    let root = repo
        .create_message(CreateMessageParams {
            thread_id: thread.id,
            author_id: user.id,
            content: "Looking forward to it!".to_string(),
            parent_id: None,
        })
        .await?;

    let reply = repo
        .create_message(CreateMessageParams {
            thread_id: thread.id,
            author_id: user.id,
            content: "Same here.".to_string(),
            parent_id: Some(root.id),
        })
        .await?;

    assert_eq!(reply.parent_id, Some(root.id));

    let messages = repo.get_messages(thread.id).await?;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].id, root.id);
    assert_eq!(messages[1].id, reply.id);

    Ok(())
}

/// Tests that a message in another thread is not visible through
/// `find_message_in_thread`.
///
/// Expected: Ok(Some) in its own thread, Ok(None) through the other
#[tokio::test]
async fn scopes_message_lookup_to_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_discussion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await?;
    let thread_a = factory::discussion::create_event_thread(db, event.id, user.id).await?;
    let thread_b = factory::discussion::create_event_thread(db, event.id, user.id).await?;
    let message = factory::discussion::create_message(db, thread_a.id, user.id, None).await?;

    let repo = DiscussionRepository::new(db);

    assert!(repo
        .find_message_in_thread(message.id, thread_a.id)
        .await?
        .is_some());
    assert!(repo
        .find_message_in_thread(message.id, thread_b.id)
        .await?
        .is_none());

    Ok(())
}
