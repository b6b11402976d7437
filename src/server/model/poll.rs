//! Poll domain models and parameters.

use crate::model::poll::{CreatePollDto, OptionDto, PollDetailDto, QuestionDto};

#[derive(Debug, Clone)]
pub struct CreateQuestionParams {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CreatePollParams {
    pub event_id: i32,
    pub title: String,
    pub created_by_id: i32,
    pub questions: Vec<CreateQuestionParams>,
}

impl CreatePollParams {
    pub fn from_dto(event_id: i32, created_by_id: i32, dto: CreatePollDto) -> Self {
        Self {
            event_id,
            title: dto.title,
            created_by_id,
            questions: dto
                .questions
                .into_iter()
                .map(|question| CreateQuestionParams {
                    question: question.question,
                    options: question.options.into_iter().map(|o| o.label).collect(),
                })
                .collect(),
        }
    }
}

/// An option with its current vote count.
#[derive(Debug, Clone)]
pub struct OptionWithVotes {
    pub option: entity::poll_option::Model,
    pub votes: u64,
}

/// A question with its options and their tallies.
#[derive(Debug, Clone)]
pub struct QuestionWithOptions {
    pub question: entity::poll_question::Model,
    pub options: Vec<OptionWithVotes>,
}

/// A poll with its full structure and per-option tallies, computed on read.
#[derive(Debug, Clone)]
pub struct PollDetail {
    pub poll: entity::poll::Model,
    pub questions: Vec<QuestionWithOptions>,
}

impl PollDetail {
    pub fn into_dto(self) -> PollDetailDto {
        PollDetailDto {
            poll: self.poll.into(),
            questions: self
                .questions
                .into_iter()
                .map(|question| QuestionDto {
                    id: question.question.id,
                    poll_id: question.question.poll_id,
                    question: question.question.question,
                    options: question
                        .options
                        .into_iter()
                        .map(|option| OptionDto {
                            id: option.option.id,
                            question_id: option.option.question_id,
                            label: option.option.label,
                            votes: option.votes,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
