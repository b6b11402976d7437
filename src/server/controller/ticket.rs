use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        ticket::{CreateTicketTypeDto, PurchaseTicketDto, TicketDto, TicketTypeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, CurrentUser, Permission},
        model::ticket::{CreateTicketTypeParams, PurchaseTicketParams},
        service::ticket::TicketService,
        state::AppState,
    },
};

/// Tag for grouping ticketing endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "tickets";

/// Create a ticket type with a price and a sales quota.
///
/// Requires the event's ticketing feature to be enabled.
///
/// # Access Control
/// - `EventOrganizer` - Only organizers may create ticket types
#[utoipa::path(
    post,
    path = "/api/tickets/events/{event_id}/types",
    tag = TICKET_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    request_body = CreateTicketTypeDto,
    responses(
        (status = 201, description = "Ticket type created", body = TicketTypeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 412, description = "Ticketing disabled for this event", body = ErrorDto)
    ),
)]
pub async fn create_ticket_type(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(payload): Json<CreateTicketTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TicketService::new(&state.db);

    service.require_ticketing_event(event_id).await?;

    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventOrganizer(event_id)])
        .await?;

    let ticket_type = service
        .create_type(CreateTicketTypeParams::from_dto(event_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(TicketTypeDto::from(ticket_type))))
}

/// List an event's ticket types.
#[utoipa::path(
    get,
    path = "/api/tickets/events/{event_id}/types",
    tag = TICKET_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Ticket types", body = [TicketTypeDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 412, description = "Ticketing disabled for this event", body = ErrorDto)
    ),
)]
pub async fn list_ticket_types(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let types = TicketService::new(&state.db).list_types(event_id).await?;

    let types: Vec<TicketTypeDto> = types.into_iter().map(TicketTypeDto::from).collect();

    Ok((StatusCode::OK, Json(types)))
}

/// Purchase one ticket of a type.
///
/// The purchase form is public: the buyer is identified by contact fields,
/// not an account. The quota check and the insert run atomically, and each
/// email may hold at most one ticket per type.
///
/// # Returns
/// - `201 Created` - The ticket
/// - `409 Conflict` - This email already holds a ticket of this type
/// - `412 Precondition Failed` - Quota exhausted or ticketing disabled
#[utoipa::path(
    post,
    path = "/api/tickets/types/{ticket_type_id}/purchase",
    tag = TICKET_TAG,
    params(("ticket_type_id" = i32, Path, description = "Ticket type id")),
    request_body = PurchaseTicketDto,
    responses(
        (status = 201, description = "Ticket purchased", body = TicketDto),
        (status = 404, description = "Ticket type not found", body = ErrorDto),
        (status = 409, description = "Attendee already has a ticket", body = ErrorDto),
        (status = 412, description = "No more tickets available", body = ErrorDto)
    ),
)]
pub async fn purchase_ticket(
    State(state): State<AppState>,
    Path(ticket_type_id): Path<i32>,
    Json(payload): Json<PurchaseTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = TicketService::new(&state.db)
        .purchase(ticket_type_id, PurchaseTicketParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(TicketDto::from(ticket))))
}
