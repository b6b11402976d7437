use crate::server::{
    error::AppError,
    model::discussion::CreateMessageParams,
    service::discussion::DiscussionService,
};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_event_with_organizer};

/// Tests that a reply whose parent lives in another thread is rejected.
///
/// Expected: Err(Validation), and no message is created
#[tokio::test]
async fn create_message_rejects_parent_from_other_thread() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_discussion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await.unwrap();
    let thread_a = factory::discussion::create_event_thread(db, event.id, user.id)
        .await
        .unwrap();
    let thread_b = factory::discussion::create_event_thread(db, event.id, user.id)
        .await
        .unwrap();
    let foreign_parent = factory::discussion::create_message(db, thread_a.id, user.id, None)
        .await
        .unwrap();

    let service = DiscussionService::new(db);

    let result = service
        .create_message(CreateMessageParams {
            thread_id: thread_b.id,
            author_id: user.id,
            content: "reply".to_string(),
            parent_id: Some(foreign_parent.id),
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(service.get_messages(thread_b.id).await?.is_empty());

    Ok(())
}

/// Tests that a reply to a message of the same thread is accepted.
///
/// Expected: Ok with the parent link set
#[tokio::test]
async fn create_message_accepts_parent_in_same_thread() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_discussion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await.unwrap();
    let thread = factory::discussion::create_event_thread(db, event.id, user.id)
        .await
        .unwrap();
    let parent = factory::discussion::create_message(db, thread.id, user.id, None)
        .await
        .unwrap();

    let message = DiscussionService::new(db)
        .create_message(CreateMessageParams {
            thread_id: thread.id,
            author_id: user.id,
            content: "reply".to_string(),
            parent_id: Some(parent.id),
        })
        .await?;

    assert_eq!(message.parent_id, Some(parent.id));

    Ok(())
}
