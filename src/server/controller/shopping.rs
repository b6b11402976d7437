use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        addon::{CreateShoppingItemDto, ShoppingItemDto, UpdateShoppingItemDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, CurrentUser, Permission},
        model::addon::{CreateShoppingItemParams, UpdateShoppingItemParams},
        service::shopping::ShoppingService,
        state::AppState,
    },
};

/// Tag for grouping shopping list endpoints in OpenAPI documentation
pub static SHOPPING_TAG: &str = "shopping";

/// Register a shopping item for an event.
///
/// Requires the event's shopping list feature; item names are unique within
/// an event.
#[utoipa::path(
    post,
    path = "/api/shopping/events/{event_id}/items",
    tag = SHOPPING_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    request_body = CreateShoppingItemDto,
    responses(
        (status = 201, description = "Item registered", body = ShoppingItemDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Item already registered", body = ErrorDto),
        (status = 412, description = "Shopping list disabled for this event", body = ErrorDto)
    ),
)]
pub async fn add_shopping_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(payload): Json<CreateShoppingItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ShoppingService::new(&state.db);

    service.require_shopping_event(event_id).await?;

    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(event_id)])
        .await?;

    let item = service
        .create(CreateShoppingItemParams::from_dto(event_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ShoppingItemDto::from(item))))
}

/// List an event's shopping items.
#[utoipa::path(
    get,
    path = "/api/shopping/events/{event_id}/items",
    tag = SHOPPING_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Items", body = [ShoppingItemDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 412, description = "Shopping list disabled for this event", body = ErrorDto)
    ),
)]
pub async fn list_shopping_items(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ShoppingService::new(&state.db);

    service.require_shopping_event(event_id).await?;

    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(event_id)])
        .await?;

    let items = service.list_for_event(event_id).await?;

    let items: Vec<ShoppingItemDto> = items.into_iter().map(ShoppingItemDto::from).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// Update a shopping item. Allowed for the owner or an event organizer.
#[utoipa::path(
    patch,
    path = "/api/shopping/items/{item_id}",
    tag = SHOPPING_TAG,
    params(("item_id" = i32, Path, description = "Shopping item id")),
    request_body = UpdateShoppingItemDto,
    responses(
        (status = 200, description = "Updated item", body = ShoppingItemDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 404, description = "Shopping item not found", body = ErrorDto),
        (status = 409, description = "Item name already taken", body = ErrorDto)
    ),
)]
pub async fn update_shopping_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<i32>,
    Json(payload): Json<UpdateShoppingItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ShoppingService::new(&state.db);

    let item = service.get_item(item_id).await?;

    if item.owner_id != user.id {
        AuthGuard::new(&state.db)
            .require(&user, &[Permission::EventOrganizer(item.event_id)])
            .await?;
    }

    let item = service
        .update_item(item, UpdateShoppingItemParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ShoppingItemDto::from(item))))
}

/// Delete a shopping item. Allowed for the owner or an event organizer.
#[utoipa::path(
    delete,
    path = "/api/shopping/items/{item_id}",
    tag = SHOPPING_TAG,
    params(("item_id" = i32, Path, description = "Shopping item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 404, description = "Shopping item not found", body = ErrorDto)
    ),
)]
pub async fn delete_shopping_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ShoppingService::new(&state.db);

    let item = service.get_item(item_id).await?;

    if item.owner_id != user.id {
        AuthGuard::new(&state.db)
            .require(&user, &[Permission::EventOrganizer(item.event_id)])
            .await?;
    }

    service.delete_item(item).await?;

    Ok(StatusCode::NO_CONTENT)
}
