use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{
            AddOrganizerDto, AddParticipantDto, CreateEventDto, EventDetailDto, EventDto,
            OrganizerDto, ParticipantDto, UpdateEventDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, CurrentUser, Permission},
        model::event::{CreateEventParams, UpdateEventParams},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "events";

/// Create a new event.
///
/// The caller is always recorded as an organizer; extra organizer ids are
/// validated and linked in the same transaction as the event row.
///
/// # Access Control
/// - `GroupEventCreator` - When the event is group-scoped, the caller needs
///   event-creation rights in that group
///
/// # Returns
/// - `201 Created` - The new event
/// - `403 Forbidden` - Caller may not create events for the group
/// - `404 Not Found` - An organizer id does not resolve
/// - `422 Unprocessable Entity` - end_date not after start_date
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot create events for this group", body = ErrorDto),
        (status = 404, description = "Organizer not found", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(group_id) = payload.group_id {
        AuthGuard::new(&state.db)
            .require(&user, &[Permission::GroupEventCreator(group_id)])
            .await?;
    }

    let event = EventService::new(&state.db)
        .create(CreateEventParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(EventDto::from(event))))
}

/// List all events.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events", body = [EventDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_all().await?;

    let events: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();

    Ok((StatusCode::OK, Json(events)))
}

/// Get an event with its organizer and participant rosters.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event detail", body = EventDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .get_with_relations(event_id)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Update an event, including its feature flags.
///
/// # Access Control
/// - `EventOrganizer` - Only organizers may update the event
#[utoipa::path(
    patch,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Updated event", body = EventDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventOrganizer(event_id)])
        .await?;

    let event = EventService::new(&state.db)
        .update(event_id, UpdateEventParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(EventDto::from(event))))
}

/// Delete an event and everything scoped to it.
///
/// # Access Control
/// - `EventOrganizer` - Only organizers may delete the event
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventOrganizer(event_id)])
        .await?;

    EventService::new(&state.db).delete(event_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add an organizer to an event.
///
/// # Access Control
/// - `EventOrganizer` - Only existing organizers may add more
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/organizers",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    request_body = AddOrganizerDto,
    responses(
        (status = 201, description = "Organizer added", body = OrganizerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User already organizer", body = ErrorDto)
    ),
)]
pub async fn add_event_organizer(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(payload): Json<AddOrganizerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventOrganizer(event_id)])
        .await?;

    let organizer = EventService::new(&state.db)
        .add_organizer(event_id, payload.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(OrganizerDto::from(organizer))))
}

/// Remove an organizer from an event.
///
/// # Access Control
/// - `EventOrganizer` - Only organizers may remove organizers
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}/organizers/{user_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "Organizer's user id")
    ),
    responses(
        (status = 204, description = "Organizer removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 404, description = "Organizer not found", body = ErrorDto)
    ),
)]
pub async fn remove_event_organizer(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((event_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventOrganizer(event_id)])
        .await?;

    EventService::new(&state.db)
        .remove_organizer(event_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a participant to an event.
///
/// A user may join an event themself; adding anyone else requires organizer
/// privileges.
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/participants",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    request_body = AddParticipantDto,
    responses(
        (status = 201, description = "Participant added", body = ParticipantDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User already participant", body = ErrorDto)
    ),
)]
pub async fn add_event_participant(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(payload): Json<AddParticipantDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.user_id != user.id {
        AuthGuard::new(&state.db)
            .require(&user, &[Permission::EventOrganizer(event_id)])
            .await?;
    }

    let participant = EventService::new(&state.db)
        .add_participant(event_id, payload.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ParticipantDto::from(participant))))
}

/// Remove a participant from an event.
///
/// A user may withdraw themself; removing anyone else requires organizer
/// privileges.
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}/participants/{user_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "Participant's user id")
    ),
    responses(
        (status = 204, description = "Participant removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 404, description = "Participant not found", body = ErrorDto)
    ),
)]
pub async fn remove_event_participant(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((event_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    if user_id != user.id {
        AuthGuard::new(&state.db)
            .require(&user, &[Permission::EventOrganizer(event_id)])
            .await?;
    }

    EventService::new(&state.db)
        .remove_participant(event_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
