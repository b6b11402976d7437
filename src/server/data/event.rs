use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::event::{CreateEventParams, EventWithRelations, UpdateEventParams};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event and its organizer links in one transaction.
    ///
    /// `params.organizer_ids` must already be validated user ids and include
    /// the creator; a failure on any link rolls back the event row as well.
    pub async fn create(&self, params: CreateEventParams) -> Result<entity::event::Model, DbErr> {
        let txn = self.db.begin().await?;

        let event = entity::event::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            location: ActiveValue::Set(params.location),
            cover_photo: ActiveValue::Set(params.cover_photo),
            is_private: ActiveValue::Set(params.is_private),
            created_by_id: ActiveValue::Set(params.created_by_id),
            group_id: ActiveValue::Set(params.group_id),
            polls_enabled: ActiveValue::Set(params.polls_enabled),
            ticketing_enabled: ActiveValue::Set(params.ticketing_enabled),
            shopping_list_enabled: ActiveValue::Set(params.shopping_list_enabled),
            carpool_enabled: ActiveValue::Set(params.carpool_enabled),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for user_id in params.organizer_ids {
            entity::event_organizer::ActiveModel {
                event_id: ActiveValue::Set(event.id),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(event)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// Gets an event together with its organizer and participant rosters.
    pub async fn get_with_relations(&self, id: i32) -> Result<Option<EventWithRelations>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let organizers = entity::prelude::EventOrganizer::find()
            .filter(entity::event_organizer::Column::EventId.eq(id))
            .order_by_asc(entity::event_organizer::Column::Id)
            .all(self.db)
            .await?;

        let participants = entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(id))
            .order_by_asc(entity::event_participant::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(EventWithRelations {
            event,
            organizers,
            participants,
        }))
    }

    pub async fn get_all(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies a partial update; unset fields keep their current value.
    pub async fn update(
        &self,
        event: entity::event::Model,
        params: UpdateEventParams,
    ) -> Result<entity::event::Model, DbErr> {
        let mut active_model: entity::event::ActiveModel = event.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(start_date) = params.start_date {
            active_model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = params.end_date {
            active_model.end_date = ActiveValue::Set(end_date);
        }
        if let Some(location) = params.location {
            active_model.location = ActiveValue::Set(location);
        }
        if let Some(cover_photo) = params.cover_photo {
            active_model.cover_photo = ActiveValue::Set(Some(cover_photo));
        }
        if let Some(is_private) = params.is_private {
            active_model.is_private = ActiveValue::Set(is_private);
        }
        if let Some(polls_enabled) = params.polls_enabled {
            active_model.polls_enabled = ActiveValue::Set(polls_enabled);
        }
        if let Some(ticketing_enabled) = params.ticketing_enabled {
            active_model.ticketing_enabled = ActiveValue::Set(ticketing_enabled);
        }
        if let Some(shopping_list_enabled) = params.shopping_list_enabled {
            active_model.shopping_list_enabled = ActiveValue::Set(shopping_list_enabled);
        }
        if let Some(carpool_enabled) = params.carpool_enabled {
            active_model.carpool_enabled = ActiveValue::Set(carpool_enabled);
        }

        active_model.update(self.db).await
    }

    /// Deletes an event. Everything scoped to it (threads, albums, polls,
    /// ticket types, add-on rows, roster links) goes with it through the
    /// storage-layer cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
