use chrono::{DateTime, Utc};
use entity::discussion_thread::ThreadContext;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateThreadDto {
    pub title: String,
    #[schema(value_type = String)]
    pub context: ThreadContext,
    #[serde(default)]
    pub group_id: Option<i32>,
    #[serde(default)]
    pub event_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ThreadDto {
    pub id: i32,
    pub title: String,
    #[schema(value_type = String)]
    pub context: ThreadContext,
    pub group_id: Option<i32>,
    pub event_id: Option<i32>,
    pub created_by_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<entity::discussion_thread::Model> for ThreadDto {
    fn from(thread: entity::discussion_thread::Model) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            context: thread.context,
            group_id: thread.group_id,
            event_id: thread.event_id,
            created_by_id: thread.created_by_id,
            created_at: thread.created_at,
        }
    }
}

/// Thread with its messages in id order; clients rebuild the reply tree from
/// each message's parent_id.
#[derive(Serialize, ToSchema)]
pub struct ThreadDetailDto {
    #[serde(flatten)]
    pub thread: ThreadDto,
    pub messages: Vec<MessageDto>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateMessageDto {
    pub content: String,
    /// Message being replied to; must belong to the same thread.
    #[serde(default)]
    pub parent_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub thread_id: i32,
    pub author_id: i32,
    pub content: String,
    pub parent_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::message::Model> for MessageDto {
    fn from(message: entity::message::Model) -> Self {
        Self {
            id: message.id,
            thread_id: message.thread_id,
            author_id: message.author_id,
            content: message.content,
            parent_id: message.parent_id,
            created_at: message.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_deserializes_from_lowercase() {
        let dto: CreateThreadDto = serde_json::from_value(serde_json::json!({
            "title": "Welcome thread",
            "context": "event",
            "event_id": 3
        }))
        .unwrap();

        assert_eq!(dto.context, ThreadContext::Event);
        assert_eq!(dto.event_id, Some(3));
        assert_eq!(dto.group_id, None);
    }
}
