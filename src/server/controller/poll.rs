use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        poll::{CreatePollDto, PollDetailDto, PollDto, VoteDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, CurrentUser, Permission},
        model::poll::CreatePollParams,
        service::poll::PollService,
        state::AppState,
    },
};

/// Tag for grouping poll endpoints in OpenAPI documentation
pub static POLL_TAG: &str = "polls";

/// Create a poll with its questions and options.
///
/// Requires the event's polls feature to be enabled.
///
/// # Access Control
/// - `EventOrganizer` - Only organizers may create polls
///
/// # Returns
/// - `201 Created` - The new poll
/// - `412 Precondition Failed` - Polls disabled for the event
/// - `422 Unprocessable Entity` - No questions, or a question with fewer
///   than two options
#[utoipa::path(
    post,
    path = "/api/polls/events/{event_id}",
    tag = POLL_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    request_body = CreatePollDto,
    responses(
        (status = 201, description = "Poll created", body = PollDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 412, description = "Polls disabled for this event", body = ErrorDto),
        (status = 422, description = "Invalid poll structure", body = ValidationErrorDto)
    ),
)]
pub async fn create_poll(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(payload): Json<CreatePollDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventOrganizer(event_id)])
        .await?;

    let poll = PollService::new(&state.db)
        .create(CreatePollParams::from_dto(event_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(PollDto::from(poll))))
}

/// List an event's polls.
///
/// # Access Control
/// - `EventAccess` - Participants and organizers
#[utoipa::path(
    get,
    path = "/api/polls/events/{event_id}",
    tag = POLL_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Polls", body = [PollDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto)
    ),
)]
pub async fn list_polls(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(event_id)])
        .await?;

    let polls = PollService::new(&state.db).list_for_event(event_id).await?;

    let polls: Vec<PollDto> = polls.into_iter().map(PollDto::from).collect();

    Ok((StatusCode::OK, Json(polls)))
}

/// Get a poll with per-option vote tallies, computed on read.
///
/// # Access Control
/// - `EventAccess` - Participants and organizers
#[utoipa::path(
    get,
    path = "/api/polls/{poll_id}",
    tag = POLL_TAG,
    params(("poll_id" = i32, Path, description = "Poll id")),
    responses(
        (status = 200, description = "Poll with tallies", body = PollDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto)
    ),
)]
pub async fn get_poll(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(poll_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PollService::new(&state.db);

    let detail = service.get_detail(poll_id).await?;

    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(detail.poll.event_id)])
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Submit a ballot of (question, option) choices.
///
/// A repeated vote by the same user on the same question overwrites the
/// earlier choice, so each user holds at most one vote per question.
///
/// # Access Control
/// - `EventAccess` - Participants and organizers
///
/// # Returns
/// - `200 OK` - Updated poll with tallies
/// - `412 Precondition Failed` - Poll is closed
/// - `422 Unprocessable Entity` - Question or option not part of the poll
#[utoipa::path(
    post,
    path = "/api/polls/{poll_id}/votes",
    tag = POLL_TAG,
    params(("poll_id" = i32, Path, description = "Poll id")),
    request_body = Vec<VoteDto>,
    responses(
        (status = 200, description = "Updated poll with tallies", body = PollDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 412, description = "Poll is closed", body = ErrorDto),
        (status = 422, description = "Unknown question or option", body = ValidationErrorDto)
    ),
)]
pub async fn submit_votes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(poll_id): Path<i32>,
    Json(payload): Json<Vec<VoteDto>>,
) -> Result<impl IntoResponse, AppError> {
    let service = PollService::new(&state.db);

    let poll = service.find_by_id(poll_id).await?;

    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(poll.event_id)])
        .await?;

    let votes = payload
        .into_iter()
        .map(|vote| (vote.question_id, vote.option_id))
        .collect();

    let detail = service.cast_votes(poll_id, votes, user.id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}
