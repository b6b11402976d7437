use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, poll::PollRepository},
    error::AppError,
    model::poll::{CreatePollParams, PollDetail},
};

pub struct PollService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a poll with its questions and options in one transaction.
    ///
    /// The event must exist and have polls enabled; a poll needs at least
    /// one question and every question at least two options.
    pub async fn create(&self, params: CreatePollParams) -> Result<entity::poll::Model, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id(params.event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if !event.polls_enabled {
            return Err(AppError::PreconditionFailed(
                "Polls are not enabled for this event".to_string(),
            ));
        }

        if params.questions.is_empty() {
            return Err(AppError::validation(
                "questions",
                "Poll must contain questions",
            ));
        }

        for question in &params.questions {
            if question.options.len() < 2 {
                return Err(AppError::validation(
                    "options",
                    "Each question needs at least two options",
                ));
            }
        }

        Ok(PollRepository::new(self.db).create(params).await?)
    }

    pub async fn list_for_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::poll::Model>, AppError> {
        if EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        Ok(PollRepository::new(self.db).get_for_event(event_id).await?)
    }

    pub async fn find_by_id(&self, poll_id: i32) -> Result<entity::poll::Model, AppError> {
        PollRepository::new(self.db)
            .find_by_id(poll_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))
    }

    /// Gets a poll with per-option tallies, computed on read.
    pub async fn get_detail(&self, poll_id: i32) -> Result<PollDetail, AppError> {
        PollRepository::new(self.db)
            .get_detail(poll_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))
    }

    /// Submits a ballot: one (question, option) choice per entry.
    ///
    /// Every question must belong to the poll and every option to its
    /// question. A repeated vote by the same user on the same question
    /// OVERWRITES the earlier choice; the write is an atomic upsert on the
    /// (question, voter) unique key, so exactly one vote row exists per pair
    /// no matter how many submissions arrive.
    pub async fn cast_votes(
        &self,
        poll_id: i32,
        votes: Vec<(i32, i32)>,
        voter_id: i32,
    ) -> Result<PollDetail, AppError> {
        let repo = PollRepository::new(self.db);

        let poll = self.find_by_id(poll_id).await?;

        if !poll.is_active {
            return Err(AppError::PreconditionFailed("Poll is closed".to_string()));
        }

        for (question_id, option_id) in votes {
            if repo
                .find_question_in_poll(question_id, poll_id)
                .await?
                .is_none()
            {
                return Err(AppError::validation(
                    "question_id",
                    format!("Question {} not part of this poll", question_id),
                ));
            }

            if repo
                .find_option_for_question(option_id, question_id)
                .await?
                .is_none()
            {
                return Err(AppError::validation(
                    "option_id",
                    format!("Option {} invalid for question {}", option_id, question_id),
                ));
            }

            repo.cast_vote(question_id, option_id, voter_id).await?;
        }

        self.get_detail(poll_id).await
    }
}
