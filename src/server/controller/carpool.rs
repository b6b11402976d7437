use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        addon::{CarpoolOfferDto, CreateCarpoolOfferDto, UpdateCarpoolOfferDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, CurrentUser, Permission},
        model::addon::{CreateCarpoolOfferParams, UpdateCarpoolOfferParams},
        service::carpool::CarpoolService,
        state::AppState,
    },
};

/// Tag for grouping carpool endpoints in OpenAPI documentation
pub static CARPOOL_TAG: &str = "carpool";

/// Offer a carpool ride for an event.
///
/// Requires the event's carpooling feature to be enabled.
#[utoipa::path(
    post,
    path = "/api/carpool/events/{event_id}/offers",
    tag = CARPOOL_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    request_body = CreateCarpoolOfferDto,
    responses(
        (status = 201, description = "Offer created", body = CarpoolOfferDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 412, description = "Carpooling disabled for this event", body = ErrorDto)
    ),
)]
pub async fn create_carpool_offer(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(payload): Json<CreateCarpoolOfferDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarpoolService::new(&state.db);

    service.require_carpool_event(event_id).await?;

    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(event_id)])
        .await?;

    let offer = service
        .create(CreateCarpoolOfferParams::from_dto(event_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(CarpoolOfferDto::from(offer))))
}

/// List an event's carpool offers.
#[utoipa::path(
    get,
    path = "/api/carpool/events/{event_id}/offers",
    tag = CARPOOL_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Offers", body = [CarpoolOfferDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 412, description = "Carpooling disabled for this event", body = ErrorDto)
    ),
)]
pub async fn list_carpool_offers(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarpoolService::new(&state.db);

    service.require_carpool_event(event_id).await?;

    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(event_id)])
        .await?;

    let offers = service.list_for_event(event_id).await?;

    let offers: Vec<CarpoolOfferDto> = offers.into_iter().map(CarpoolOfferDto::from).collect();

    Ok((StatusCode::OK, Json(offers)))
}

/// Update a carpool offer. Allowed for the driver or an event organizer.
#[utoipa::path(
    patch,
    path = "/api/carpool/offers/{offer_id}",
    tag = CARPOOL_TAG,
    params(("offer_id" = i32, Path, description = "Carpool offer id")),
    request_body = UpdateCarpoolOfferDto,
    responses(
        (status = 200, description = "Updated offer", body = CarpoolOfferDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 404, description = "Carpool offer not found", body = ErrorDto)
    ),
)]
pub async fn update_carpool_offer(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(offer_id): Path<i32>,
    Json(payload): Json<UpdateCarpoolOfferDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarpoolService::new(&state.db);

    let offer = service.get_offer(offer_id).await?;

    if offer.driver_id != user.id {
        AuthGuard::new(&state.db)
            .require(&user, &[Permission::EventOrganizer(offer.event_id)])
            .await?;
    }

    let offer = service
        .update_offer(offer, UpdateCarpoolOfferParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(CarpoolOfferDto::from(offer))))
}

/// Delete a carpool offer. Allowed for the driver or an event organizer.
#[utoipa::path(
    delete,
    path = "/api/carpool/offers/{offer_id}",
    tag = CARPOOL_TAG,
    params(("offer_id" = i32, Path, description = "Carpool offer id")),
    responses(
        (status = 204, description = "Offer deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 404, description = "Carpool offer not found", body = ErrorDto)
    ),
)]
pub async fn delete_carpool_offer(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(offer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarpoolService::new(&state.db);

    let offer = service.get_offer(offer_id).await?;

    if offer.driver_id != user.id {
        AuthGuard::new(&state.db)
            .require(&user, &[Permission::EventOrganizer(offer.event_id)])
            .await?;
    }

    service.delete_offer(offer).await?;

    Ok(StatusCode::NO_CONTENT)
}
