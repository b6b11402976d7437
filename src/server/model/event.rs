//! Event domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::event::{
    CreateEventDto, EventDetailDto, OrganizerDto, ParticipantDto, UpdateEventDto,
};

#[derive(Debug, Clone)]
pub struct CreateEventParams {
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
    /// Deduplicated organizer user ids. Always contains the creator.
    pub organizer_ids: Vec<i32>,
}

impl CreateEventParams {
    /// Builds params from the request body, folding the creator into the
    /// organizer set.
    pub fn from_dto(created_by_id: i32, dto: CreateEventDto) -> Self {
        let mut organizer_ids = dto.organizer_ids;
        organizer_ids.push(created_by_id);
        organizer_ids.sort_unstable();
        organizer_ids.dedup();

        Self {
            name: dto.name,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            location: dto.location,
            cover_photo: dto.cover_photo,
            is_private: dto.is_private,
            created_by_id,
            group_id: dto.group_id,
            polls_enabled: dto.polls_enabled,
            ticketing_enabled: dto.ticketing_enabled,
            shopping_list_enabled: dto.shopping_list_enabled,
            carpool_enabled: dto.carpool_enabled,
            organizer_ids,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateEventParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub cover_photo: Option<String>,
    pub is_private: Option<bool>,
    pub polls_enabled: Option<bool>,
    pub ticketing_enabled: Option<bool>,
    pub shopping_list_enabled: Option<bool>,
    pub carpool_enabled: Option<bool>,
}

impl UpdateEventParams {
    pub fn from_dto(dto: UpdateEventDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            location: dto.location,
            cover_photo: dto.cover_photo,
            is_private: dto.is_private,
            polls_enabled: dto.polls_enabled,
            ticketing_enabled: dto.ticketing_enabled,
            shopping_list_enabled: dto.shopping_list_enabled,
            carpool_enabled: dto.carpool_enabled,
        }
    }
}

/// An event together with its organizer and participant rosters.
#[derive(Debug, Clone)]
pub struct EventWithRelations {
    pub event: entity::event::Model,
    pub organizers: Vec<entity::event_organizer::Model>,
    pub participants: Vec<entity::event_participant::Model>,
}

impl EventWithRelations {
    pub fn into_dto(self) -> EventDetailDto {
        EventDetailDto {
            event: self.event.into(),
            organizers: self.organizers.into_iter().map(OrganizerDto::from).collect(),
            participants: self
                .participants
                .into_iter()
                .map(ParticipantDto::from)
                .collect(),
        }
    }
}
