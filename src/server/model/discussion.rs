//! Discussion domain models and parameters.

use entity::discussion_thread::ThreadContext;

use crate::{
    model::discussion::{CreateMessageDto, CreateThreadDto, MessageDto, ThreadDetailDto},
    server::error::AppError,
};

/// The resolved container of a thread: exactly one of a group or an event.
///
/// Constructing this through `CreateThreadParams::from_dto` is the only path
/// into thread creation, so an ambiguous or missing context cannot reach the
/// repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadScope {
    Group(i32),
    Event(i32),
}

#[derive(Debug, Clone)]
pub struct CreateThreadParams {
    pub title: String,
    pub scope: ThreadScope,
    pub created_by_id: i32,
}

impl CreateThreadParams {
    /// Validates the context discriminant against the provided ids.
    ///
    /// The declared context must come with its matching id; the opposite id
    /// must be absent.
    pub fn from_dto(created_by_id: i32, dto: CreateThreadDto) -> Result<Self, AppError> {
        let scope = match (dto.context, dto.group_id, dto.event_id) {
            (ThreadContext::Group, Some(group_id), None) => ThreadScope::Group(group_id),
            (ThreadContext::Group, None, _) => {
                return Err(AppError::validation(
                    "group_id",
                    "group_id is required when context = group",
                ))
            }
            (ThreadContext::Event, None, Some(event_id)) => ThreadScope::Event(event_id),
            (ThreadContext::Event, _, None) => {
                return Err(AppError::validation(
                    "event_id",
                    "event_id is required when context = event",
                ))
            }
            _ => {
                return Err(AppError::validation(
                    "context",
                    "a thread is scoped to exactly one of a group or an event",
                ))
            }
        };

        Ok(Self {
            title: dto.title,
            scope,
            created_by_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateMessageParams {
    pub thread_id: i32,
    pub author_id: i32,
    pub content: String,
    pub parent_id: Option<i32>,
}

impl CreateMessageParams {
    pub fn from_dto(thread_id: i32, author_id: i32, dto: CreateMessageDto) -> Self {
        Self {
            thread_id,
            author_id,
            content: dto.content,
            parent_id: dto.parent_id,
        }
    }
}

/// A thread together with its messages in id order.
#[derive(Debug, Clone)]
pub struct ThreadWithMessages {
    pub thread: entity::discussion_thread::Model,
    pub messages: Vec<entity::message::Model>,
}

impl ThreadWithMessages {
    pub fn into_dto(self) -> ThreadDetailDto {
        ThreadDetailDto {
            thread: self.thread.into(),
            messages: self.messages.into_iter().map(MessageDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(
        context: ThreadContext,
        group_id: Option<i32>,
        event_id: Option<i32>,
    ) -> CreateThreadDto {
        CreateThreadDto {
            title: "Welcome".to_string(),
            context,
            group_id,
            event_id,
        }
    }

    #[test]
    fn accepts_group_context_with_group_id() {
        let params =
            CreateThreadParams::from_dto(1, dto(ThreadContext::Group, Some(7), None)).unwrap();

        assert_eq!(params.scope, ThreadScope::Group(7));
        assert_eq!(params.created_by_id, 1);
    }

    #[test]
    fn accepts_event_context_with_event_id() {
        let params =
            CreateThreadParams::from_dto(1, dto(ThreadContext::Event, None, Some(9))).unwrap();

        assert_eq!(params.scope, ThreadScope::Event(9));
    }

    #[test]
    fn rejects_group_context_without_group_id() {
        let result = CreateThreadParams::from_dto(1, dto(ThreadContext::Group, None, None));

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn rejects_event_context_without_event_id() {
        let result = CreateThreadParams::from_dto(1, dto(ThreadContext::Event, Some(7), None));

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn rejects_both_container_ids() {
        let result = CreateThreadParams::from_dto(1, dto(ThreadContext::Group, Some(7), Some(9)));

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
