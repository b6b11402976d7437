//! Discussion thread and message factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::discussion_thread::ThreadContext;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a thread scoped to a group.
pub async fn create_group_thread(
    db: &DatabaseConnection,
    group_id: i32,
    created_by_id: i32,
) -> Result<entity::discussion_thread::Model, DbErr> {
    entity::discussion_thread::ActiveModel {
        title: ActiveValue::Set(format!("Thread {}", next_id())),
        context: ActiveValue::Set(ThreadContext::Group),
        group_id: ActiveValue::Set(Some(group_id)),
        event_id: ActiveValue::Set(None),
        created_by_id: ActiveValue::Set(created_by_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a thread scoped to an event.
pub async fn create_event_thread(
    db: &DatabaseConnection,
    event_id: i32,
    created_by_id: i32,
) -> Result<entity::discussion_thread::Model, DbErr> {
    entity::discussion_thread::ActiveModel {
        title: ActiveValue::Set(format!("Thread {}", next_id())),
        context: ActiveValue::Set(ThreadContext::Event),
        group_id: ActiveValue::Set(None),
        event_id: ActiveValue::Set(Some(event_id)),
        created_by_id: ActiveValue::Set(created_by_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a message in a thread, optionally replying to a parent message.
pub async fn create_message(
    db: &DatabaseConnection,
    thread_id: i32,
    author_id: i32,
    parent_id: Option<i32>,
) -> Result<entity::message::Model, DbErr> {
    entity::message::ActiveModel {
        thread_id: ActiveValue::Set(thread_id),
        author_id: ActiveValue::Set(author_id),
        content: ActiveValue::Set(format!("Message {}", next_id())),
        parent_id: ActiveValue::Set(parent_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
