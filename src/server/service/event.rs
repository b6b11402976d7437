use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        event::EventRepository, participation::ParticipationRepository, user::UserRepository,
    },
    error::AppError,
    model::event::{CreateEventParams, EventWithRelations, UpdateEventParams},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event with its organizer links in one transaction.
    ///
    /// Every organizer id must resolve to a user; the date pair must be
    /// ordered. Group-scoped permission is checked by the caller before the
    /// params reach this method.
    pub async fn create(&self, params: CreateEventParams) -> Result<entity::event::Model, AppError> {
        validate_dates(params.start_date, params.end_date)?;

        let user_repo = UserRepository::new(self.db);
        for organizer_id in &params.organizer_ids {
            if user_repo.find_by_id(*organizer_id).await?.is_none() {
                return Err(AppError::NotFound(format!(
                    "Organizer {} not found",
                    organizer_id
                )));
            }
        }

        Ok(EventRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::event::Model>, AppError> {
        Ok(EventRepository::new(self.db).get_all().await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<entity::event::Model, AppError> {
        EventRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Gets an event with its organizer and participant rosters.
    pub async fn get_with_relations(&self, id: i32) -> Result<EventWithRelations, AppError> {
        EventRepository::new(self.db)
            .get_with_relations(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Applies a partial update; the effective date pair is re-validated.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateEventParams,
    ) -> Result<entity::event::Model, AppError> {
        let repo = EventRepository::new(self.db);

        let event = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let start = params.start_date.unwrap_or(event.start_date);
        let end = params.end_date.unwrap_or(event.end_date);
        validate_dates(start, end)?;

        Ok(repo.update(event, params).await?)
    }

    /// Deletes the event and everything scoped to it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        Ok(repo.delete(id).await?)
    }

    /// Adds an organizer to the event roster.
    pub async fn add_organizer(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<entity::event_organizer::Model, AppError> {
        self.find_by_id(event_id).await?;

        let participation = ParticipationRepository::new(self.db);

        if participation
            .find_organizer(event_id, user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("User already organizer".to_string()));
        }

        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(participation.add_organizer(event_id, user_id).await?)
    }

    pub async fn remove_organizer(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        let participation = ParticipationRepository::new(self.db);

        let organizer = participation
            .find_organizer(event_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Organizer not found".to_string()))?;

        Ok(participation.remove_organizer(organizer).await?)
    }

    /// Adds a participant to the event roster.
    pub async fn add_participant(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<entity::event_participant::Model, AppError> {
        self.find_by_id(event_id).await?;

        let participation = ParticipationRepository::new(self.db);

        if participation
            .find_participant(event_id, user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("User already participant".to_string()));
        }

        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(participation.add_participant(event_id, user_id).await?)
    }

    pub async fn remove_participant(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        let participation = ParticipationRepository::new(self.db);

        let participant = participation
            .find_participant(event_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Participant not found".to_string()))?;

        Ok(participation.remove_participant(participant).await?)
    }
}

fn validate_dates(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::validation(
            "end_date",
            "end_date must be after start_date",
        ));
    }

    Ok(())
}
