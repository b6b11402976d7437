use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::discussion::{
    CreateMessageParams, CreateThreadParams, ThreadScope, ThreadWithMessages,
};

pub struct DiscussionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscussionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_thread(
        &self,
        params: CreateThreadParams,
    ) -> Result<entity::discussion_thread::Model, DbErr> {
        let (context, group_id, event_id) = match params.scope {
            ThreadScope::Group(group_id) => (
                entity::discussion_thread::ThreadContext::Group,
                Some(group_id),
                None,
            ),
            ThreadScope::Event(event_id) => (
                entity::discussion_thread::ThreadContext::Event,
                None,
                Some(event_id),
            ),
        };

        entity::discussion_thread::ActiveModel {
            title: ActiveValue::Set(params.title),
            context: ActiveValue::Set(context),
            group_id: ActiveValue::Set(group_id),
            event_id: ActiveValue::Set(event_id),
            created_by_id: ActiveValue::Set(params.created_by_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_thread(
        &self,
        id: i32,
    ) -> Result<Option<entity::discussion_thread::Model>, DbErr> {
        entity::prelude::DiscussionThread::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets a thread together with its messages, ordered by id so parents
    /// always precede their replies.
    pub async fn get_thread_with_messages(
        &self,
        id: i32,
    ) -> Result<Option<ThreadWithMessages>, DbErr> {
        let Some(thread) = entity::prelude::DiscussionThread::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let messages = self.get_messages(id).await?;

        Ok(Some(ThreadWithMessages { thread, messages }))
    }

    pub async fn get_messages(&self, thread_id: i32) -> Result<Vec<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::ThreadId.eq(thread_id))
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a message only if it belongs to the given thread. Used to check
    /// that a reply's parent lives in the same thread as the reply.
    pub async fn find_message_in_thread(
        &self,
        message_id: i32,
        thread_id: i32,
    ) -> Result<Option<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::Id.eq(message_id))
            .filter(entity::message::Column::ThreadId.eq(thread_id))
            .one(self.db)
            .await
    }

    pub async fn create_message(
        &self,
        params: CreateMessageParams,
    ) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            thread_id: ActiveValue::Set(params.thread_id),
            author_id: ActiveValue::Set(params.author_id),
            content: ActiveValue::Set(params.content),
            parent_id: ActiveValue::Set(params.parent_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
