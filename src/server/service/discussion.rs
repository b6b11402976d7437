use sea_orm::DatabaseConnection;

use crate::server::{
    data::discussion::DiscussionRepository,
    error::AppError,
    model::discussion::{CreateMessageParams, CreateThreadParams, ThreadWithMessages},
};

pub struct DiscussionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscussionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a thread. The params type guarantees the context is exactly
    /// one of group or event; access to that container is checked by the
    /// caller.
    pub async fn create_thread(
        &self,
        params: CreateThreadParams,
    ) -> Result<entity::discussion_thread::Model, AppError> {
        Ok(DiscussionRepository::new(self.db)
            .create_thread(params)
            .await?)
    }

    pub async fn find_thread(
        &self,
        thread_id: i32,
    ) -> Result<entity::discussion_thread::Model, AppError> {
        DiscussionRepository::new(self.db)
            .find_thread(thread_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Thread not found".to_string()))
    }

    /// Gets a thread with its messages.
    pub async fn get_thread_with_messages(
        &self,
        thread_id: i32,
    ) -> Result<ThreadWithMessages, AppError> {
        DiscussionRepository::new(self.db)
            .get_thread_with_messages(thread_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Thread not found".to_string()))
    }

    pub async fn get_messages(
        &self,
        thread_id: i32,
    ) -> Result<Vec<entity::message::Model>, AppError> {
        Ok(DiscussionRepository::new(self.db)
            .get_messages(thread_id)
            .await?)
    }

    /// Posts a message, optionally as a reply.
    ///
    /// A parent, when given, must be an existing message of the same thread.
    /// Since a parent always exists before any reply references it, the
    /// parent links can never form a cycle.
    pub async fn create_message(
        &self,
        params: CreateMessageParams,
    ) -> Result<entity::message::Model, AppError> {
        let repo = DiscussionRepository::new(self.db);

        if let Some(parent_id) = params.parent_id {
            if repo
                .find_message_in_thread(parent_id, params.thread_id)
                .await?
                .is_none()
            {
                return Err(AppError::validation(
                    "parent_id",
                    "Parent message not found in this thread",
                ));
            }
        }

        Ok(repo.create_message(params).await?)
    }
}
