use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::discussion_thread::ThreadContext;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        discussion::{CreateMessageDto, CreateThreadDto, MessageDto, ThreadDetailDto, ThreadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, CurrentUser, Permission},
        model::discussion::{CreateMessageParams, CreateThreadParams, ThreadScope},
        service::discussion::DiscussionService,
        state::AppState,
    },
};

/// Tag for grouping discussion endpoints in OpenAPI documentation
pub static DISCUSSION_TAG: &str = "discussions";

/// Checks the caller may read or post in the thread's container: group
/// membership for group threads, event access for event threads.
async fn require_thread_access(
    state: &AppState,
    user: &entity::user::Model,
    thread: &entity::discussion_thread::Model,
) -> Result<(), AppError> {
    let guard = AuthGuard::new(&state.db);

    match thread.context {
        ThreadContext::Group => {
            if let Some(group_id) = thread.group_id {
                guard
                    .require(user, &[Permission::GroupMember(group_id)])
                    .await?;
            }
        }
        ThreadContext::Event => {
            if let Some(event_id) = thread.event_id {
                guard
                    .require(user, &[Permission::EventAccess(event_id)])
                    .await?;
            }
        }
    }

    Ok(())
}

/// Create a discussion thread scoped to a group or an event.
///
/// The context must name exactly one container; group threads require group
/// membership, event threads require event access.
///
/// # Returns
/// - `201 Created` - The new thread
/// - `403 Forbidden` - No access to the named container
/// - `422 Unprocessable Entity` - Ambiguous or missing context
#[utoipa::path(
    post,
    path = "/api/discussions",
    tag = DISCUSSION_TAG,
    request_body = CreateThreadDto,
    responses(
        (status = 201, description = "Thread created", body = ThreadDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to the thread container", body = ErrorDto),
        (status = 422, description = "Ambiguous or missing context", body = ValidationErrorDto)
    ),
)]
pub async fn create_thread(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateThreadDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateThreadParams::from_dto(user.id, payload)?;

    let guard = AuthGuard::new(&state.db);
    match params.scope {
        ThreadScope::Group(group_id) => {
            guard
                .require(&user, &[Permission::GroupMember(group_id)])
                .await?;
        }
        ThreadScope::Event(event_id) => {
            guard
                .require(&user, &[Permission::EventAccess(event_id)])
                .await?;
        }
    }

    let thread = DiscussionService::new(&state.db).create_thread(params).await?;

    Ok((StatusCode::CREATED, Json(ThreadDto::from(thread))))
}

/// Get a thread with its messages.
#[utoipa::path(
    get,
    path = "/api/discussions/{thread_id}",
    tag = DISCUSSION_TAG,
    params(("thread_id" = i32, Path, description = "Thread id")),
    responses(
        (status = 200, description = "Thread with messages", body = ThreadDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to the thread container", body = ErrorDto),
        (status = 404, description = "Thread not found", body = ErrorDto)
    ),
)]
pub async fn get_thread(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(thread_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DiscussionService::new(&state.db);

    let detail = service.get_thread_with_messages(thread_id).await?;

    require_thread_access(&state, &user, &detail.thread).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Post a message to a thread, optionally as a reply.
///
/// A reply's parent must be a message of the same thread.
#[utoipa::path(
    post,
    path = "/api/discussions/{thread_id}/messages",
    tag = DISCUSSION_TAG,
    params(("thread_id" = i32, Path, description = "Thread id")),
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Message posted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to the thread container", body = ErrorDto),
        (status = 404, description = "Thread not found", body = ErrorDto),
        (status = 422, description = "Parent not in this thread", body = ValidationErrorDto)
    ),
)]
pub async fn create_message(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(thread_id): Path<i32>,
    Json(payload): Json<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DiscussionService::new(&state.db);

    let thread = service.find_thread(thread_id).await?;

    require_thread_access(&state, &user, &thread).await?;

    let message = service
        .create_message(CreateMessageParams::from_dto(thread_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::from(message))))
}

/// List a thread's messages in id order.
#[utoipa::path(
    get,
    path = "/api/discussions/{thread_id}/messages",
    tag = DISCUSSION_TAG,
    params(("thread_id" = i32, Path, description = "Thread id")),
    responses(
        (status = 200, description = "Messages in id order", body = [MessageDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to the thread container", body = ErrorDto),
        (status = 404, description = "Thread not found", body = ErrorDto)
    ),
)]
pub async fn list_messages(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(thread_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DiscussionService::new(&state.db);

    let thread = service.find_thread(thread_id).await?;

    require_thread_access(&state, &user, &thread).await?;

    let messages = service.get_messages(thread_id).await?;

    let messages: Vec<MessageDto> = messages.into_iter().map(MessageDto::from).collect();

    Ok((StatusCode::OK, Json(messages)))
}
