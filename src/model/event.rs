use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateEventDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    #[serde(default)]
    pub cover_photo: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub group_id: Option<i32>,
    /// Additional organizers beyond the creator.
    #[serde(default)]
    pub organizer_ids: Vec<i32>,
    #[serde(default = "default_true")]
    pub polls_enabled: bool,
    #[serde(default)]
    pub ticketing_enabled: bool,
    #[serde(default)]
    pub shopping_list_enabled: bool,
    #[serde(default)]
    pub carpool_enabled: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateEventDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub cover_photo: Option<String>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub polls_enabled: Option<bool>,
    #[serde(default)]
    pub ticketing_enabled: Option<bool>,
    #[serde(default)]
    pub shopping_list_enabled: Option<bool>,
    #[serde(default)]
    pub carpool_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub cover_photo: Option<String>,
    pub is_private: bool,
    pub created_by_id: i32,
    pub group_id: Option<i32>,
    pub polls_enabled: bool,
    pub ticketing_enabled: bool,
    pub shopping_list_enabled: bool,
    pub carpool_enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::event::Model> for EventDto {
    fn from(event: entity::event::Model) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            start_date: event.start_date,
            end_date: event.end_date,
            location: event.location,
            cover_photo: event.cover_photo,
            is_private: event.is_private,
            created_by_id: event.created_by_id,
            group_id: event.group_id,
            polls_enabled: event.polls_enabled,
            ticketing_enabled: event.ticketing_enabled,
            shopping_list_enabled: event.shopping_list_enabled,
            carpool_enabled: event.carpool_enabled,
            created_at: event.created_at,
        }
    }
}

/// Event with its rosters, returned by the single-event endpoint.
#[derive(Serialize, ToSchema)]
pub struct EventDetailDto {
    #[serde(flatten)]
    pub event: EventDto,
    pub organizers: Vec<OrganizerDto>,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Deserialize, ToSchema)]
pub struct AddOrganizerDto {
    pub user_id: i32,
}

#[derive(Deserialize, ToSchema)]
pub struct AddParticipantDto {
    pub user_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrganizerDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<entity::event_organizer::Model> for OrganizerDto {
    fn from(organizer: entity::event_organizer::Model) -> Self {
        Self {
            id: organizer.id,
            event_id: organizer.event_id,
            user_id: organizer.user_id,
            created_at: organizer.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub joined_at: DateTime<Utc>,
}

impl From<entity::event_participant::Model> for ParticipantDto {
    fn from(participant: entity::event_participant::Model) -> Self {
        Self {
            id: participant.id,
            event_id: participant.event_id,
            user_id: participant.user_id,
            joined_at: participant.joined_at,
        }
    }
}
