//! Event factory.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// Defaults mirror production defaults: polls enabled, every other feature
/// flag off, no owning group, a start date one week out and a four hour
/// duration.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: String,
    group_id: Option<i32>,
    created_by_id: i32,
    polls_enabled: bool,
    ticketing_enabled: bool,
    shopping_list_enabled: bool,
    carpool_enabled: bool,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, created_by_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Event {}", id),
            location: format!("Venue {}", id),
            group_id: None,
            created_by_id,
            polls_enabled: true,
            ticketing_enabled: false,
            shopping_list_enabled: false,
            carpool_enabled: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn group_id(mut self, group_id: i32) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn polls_enabled(mut self, enabled: bool) -> Self {
        self.polls_enabled = enabled;
        self
    }

    pub fn ticketing_enabled(mut self, enabled: bool) -> Self {
        self.ticketing_enabled = enabled;
        self
    }

    pub fn shopping_list_enabled(mut self, enabled: bool) -> Self {
        self.shopping_list_enabled = enabled;
        self
    }

    pub fn carpool_enabled(mut self, enabled: bool) -> Self {
        self.carpool_enabled = enabled;
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let start = Utc::now() + Duration::days(7);
        entity::event::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            start_date: ActiveValue::Set(start),
            end_date: ActiveValue::Set(start + Duration::hours(4)),
            location: ActiveValue::Set(self.location),
            cover_photo: ActiveValue::Set(None),
            is_private: ActiveValue::Set(false),
            created_by_id: ActiveValue::Set(self.created_by_id),
            group_id: ActiveValue::Set(self.group_id),
            polls_enabled: ActiveValue::Set(self.polls_enabled),
            ticketing_enabled: ActiveValue::Set(self.ticketing_enabled),
            shopping_list_enabled: ActiveValue::Set(self.shopping_list_enabled),
            carpool_enabled: ActiveValue::Set(self.carpool_enabled),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values created by the given user.
///
/// Note this does not add an organizer link; use
/// `helpers::create_event_with_organizer` or `participation::create_organizer`
/// when the test needs one.
pub async fn create_event(
    db: &DatabaseConnection,
    created_by_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, created_by_id).build().await
}
