use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateOptionDto {
    pub label: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    pub question: String,
    pub options: Vec<CreateOptionDto>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreatePollDto {
    pub title: String,
    pub questions: Vec<CreateQuestionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PollDto {
    pub id: i32,
    pub event_id: i32,
    pub title: String,
    pub created_by_id: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::poll::Model> for PollDto {
    fn from(poll: entity::poll::Model) -> Self {
        Self {
            id: poll.id,
            event_id: poll.event_id,
            title: poll.title,
            created_by_id: poll.created_by_id,
            is_active: poll.is_active,
            created_at: poll.created_at,
        }
    }
}

/// Poll with its questions, options and per-option tallies.
#[derive(Serialize, ToSchema)]
pub struct PollDetailDto {
    #[serde(flatten)]
    pub poll: PollDto,
    pub questions: Vec<QuestionDto>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub poll_id: i32,
    pub question: String,
    pub options: Vec<OptionDto>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OptionDto {
    pub id: i32,
    pub question_id: i32,
    pub label: String,
    /// Current vote count, computed when the poll is read.
    pub votes: u64,
}

/// One vote in a ballot submission.
#[derive(Deserialize, ToSchema)]
pub struct VoteDto {
    pub question_id: i32,
    pub option_id: i32,
}
