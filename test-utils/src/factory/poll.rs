//! Poll structure factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test polls with customizable fields.
pub struct PollFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    created_by_id: i32,
    title: String,
    is_active: bool,
}

impl<'a> PollFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, event_id: i32, created_by_id: i32) -> Self {
        Self {
            db,
            event_id,
            created_by_id,
            title: format!("Poll {}", next_id()),
            is_active: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::poll::Model, DbErr> {
        entity::poll::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            title: ActiveValue::Set(self.title),
            created_by_id: ActiveValue::Set(self.created_by_id),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active poll with default values.
pub async fn create_poll(
    db: &DatabaseConnection,
    event_id: i32,
    created_by_id: i32,
) -> Result<entity::poll::Model, DbErr> {
    PollFactory::new(db, event_id, created_by_id).build().await
}

/// Creates a question under a poll.
pub async fn create_question(
    db: &DatabaseConnection,
    poll_id: i32,
) -> Result<entity::poll_question::Model, DbErr> {
    entity::poll_question::ActiveModel {
        poll_id: ActiveValue::Set(poll_id),
        question: ActiveValue::Set(format!("Question {}?", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an option under a question with the given label.
pub async fn create_option(
    db: &DatabaseConnection,
    question_id: i32,
    label: impl Into<String>,
) -> Result<entity::poll_option::Model, DbErr> {
    entity::poll_option::ActiveModel {
        question_id: ActiveValue::Set(question_id),
        label: ActiveValue::Set(label.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
