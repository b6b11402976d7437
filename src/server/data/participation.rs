use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter,
};

/// Organizer and participant roster operations for events.
///
/// Both rosters are plain join tables; rows are created on add and deleted on
/// remove, independent of the event's lifetime.
pub struct ParticipationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_organizer(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<entity::event_organizer::Model, DbErr> {
        entity::event_organizer::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_organizer(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::event_organizer::Model>, DbErr> {
        entity::prelude::EventOrganizer::find()
            .filter(entity::event_organizer::Column::EventId.eq(event_id))
            .filter(entity::event_organizer::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn remove_organizer(
        &self,
        organizer: entity::event_organizer::Model,
    ) -> Result<(), DbErr> {
        organizer.delete(self.db).await?;

        Ok(())
    }

    pub async fn add_participant(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<entity::event_participant::Model, DbErr> {
        entity::event_participant::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_participant(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::event_participant::Model>, DbErr> {
        entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .filter(entity::event_participant::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn remove_participant(
        &self,
        participant: entity::event_participant::Model,
    ) -> Result<(), DbErr> {
        participant.delete(self.db).await?;

        Ok(())
    }
}
