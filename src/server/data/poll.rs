use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::poll::{
    CreatePollParams, OptionWithVotes, PollDetail, QuestionWithOptions,
};

pub struct PollRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a poll with its questions and options in one transaction.
    pub async fn create(&self, params: CreatePollParams) -> Result<entity::poll::Model, DbErr> {
        let txn = self.db.begin().await?;

        let poll = entity::poll::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            title: ActiveValue::Set(params.title),
            created_by_id: ActiveValue::Set(params.created_by_id),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for question_params in params.questions {
            let question = entity::poll_question::ActiveModel {
                poll_id: ActiveValue::Set(poll.id),
                question: ActiveValue::Set(question_params.question),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            for label in question_params.options {
                entity::poll_option::ActiveModel {
                    question_id: ActiveValue::Set(question.id),
                    label: ActiveValue::Set(label),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
            }
        }

        txn.commit().await?;

        Ok(poll)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::poll::Model>, DbErr> {
        entity::prelude::Poll::find_by_id(id).one(self.db).await
    }

    pub async fn get_for_event(&self, event_id: i32) -> Result<Vec<entity::poll::Model>, DbErr> {
        entity::prelude::Poll::find()
            .filter(entity::poll::Column::EventId.eq(event_id))
            .order_by_asc(entity::poll::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a poll with its full question/option structure and per-option
    /// vote counts. Counts are computed by the query on every call, never
    /// cached.
    pub async fn get_detail(&self, id: i32) -> Result<Option<PollDetail>, DbErr> {
        let Some(poll) = entity::prelude::Poll::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let questions = entity::prelude::PollQuestion::find()
            .filter(entity::poll_question::Column::PollId.eq(id))
            .order_by_asc(entity::poll_question::Column::Id)
            .all(self.db)
            .await?;

        let question_ids: Vec<i32> = questions.iter().map(|q| q.id).collect();

        let options = if question_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::PollOption::find()
                .filter(entity::poll_option::Column::QuestionId.is_in(question_ids.clone()))
                .order_by_asc(entity::poll_option::Column::Id)
                .all(self.db)
                .await?
        };

        let counts: HashMap<i32, i64> = if question_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::PollVote::find()
                .select_only()
                .column(entity::poll_vote::Column::OptionId)
                .column_as(entity::poll_vote::Column::Id.count(), "vote_count")
                .filter(entity::poll_vote::Column::QuestionId.is_in(question_ids))
                .group_by(entity::poll_vote::Column::OptionId)
                .into_tuple::<(i32, i64)>()
                .all(self.db)
                .await?
                .into_iter()
                .collect()
        };

        let questions = questions
            .into_iter()
            .map(|question| {
                let options = options
                    .iter()
                    .filter(|option| option.question_id == question.id)
                    .map(|option| OptionWithVotes {
                        votes: counts.get(&option.id).copied().unwrap_or(0) as u64,
                        option: option.clone(),
                    })
                    .collect();

                QuestionWithOptions { question, options }
            })
            .collect();

        Ok(Some(PollDetail { poll, questions }))
    }

    /// Finds a question only if it belongs to the given poll.
    pub async fn find_question_in_poll(
        &self,
        question_id: i32,
        poll_id: i32,
    ) -> Result<Option<entity::poll_question::Model>, DbErr> {
        entity::prelude::PollQuestion::find()
            .filter(entity::poll_question::Column::Id.eq(question_id))
            .filter(entity::poll_question::Column::PollId.eq(poll_id))
            .one(self.db)
            .await
    }

    /// Finds an option only if it belongs to the given question.
    pub async fn find_option_for_question(
        &self,
        option_id: i32,
        question_id: i32,
    ) -> Result<Option<entity::poll_option::Model>, DbErr> {
        entity::prelude::PollOption::find()
            .filter(entity::poll_option::Column::Id.eq(option_id))
            .filter(entity::poll_option::Column::QuestionId.eq(question_id))
            .one(self.db)
            .await
    }

    /// Records a vote, overwriting any previous choice by the same voter on
    /// the same question.
    ///
    /// The write is a single upsert against the (question_id, voter_id)
    /// unique key, so concurrent re-votes can never produce a second row for
    /// the pair.
    pub async fn cast_vote(
        &self,
        question_id: i32,
        option_id: i32,
        voter_id: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::PollVote::insert(entity::poll_vote::ActiveModel {
            question_id: ActiveValue::Set(question_id),
            option_id: ActiveValue::Set(option_id),
            voter_id: ActiveValue::Set(voter_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::poll_vote::Column::QuestionId,
                entity::poll_vote::Column::VoterId,
            ])
            .update_columns([
                entity::poll_vote::Column::OptionId,
                entity::poll_vote::Column::CreatedAt,
            ])
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Counts votes per option for one question, computed on read.
    pub async fn tally(&self, question_id: i32) -> Result<HashMap<i32, u64>, DbErr> {
        let counts: Vec<(i32, i64)> = entity::prelude::PollVote::find()
            .select_only()
            .column(entity::poll_vote::Column::OptionId)
            .column_as(entity::poll_vote::Column::Id.count(), "vote_count")
            .filter(entity::poll_vote::Column::QuestionId.eq(question_id))
            .group_by(entity::poll_vote::Column::OptionId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(option_id, count)| (option_id, count as u64))
            .collect())
    }
}
