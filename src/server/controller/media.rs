use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        media::{AlbumDto, CommentDto, CreateAlbumDto, CreateCommentDto, CreatePhotoDto, PhotoDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, CurrentUser, Permission},
        service::media::MediaService,
        state::AppState,
    },
};

/// Tag for grouping media endpoints in OpenAPI documentation
pub static MEDIA_TAG: &str = "media";

/// Create a photo album under an event. Any participant or organizer may do
/// so.
#[utoipa::path(
    post,
    path = "/api/media/events/{event_id}/albums",
    tag = MEDIA_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    request_body = CreateAlbumDto,
    responses(
        (status = 201, description = "Album created", body = AlbumDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn create_album(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(payload): Json<CreateAlbumDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(event_id)])
        .await?;

    let album = MediaService::new(&state.db)
        .create_album(event_id, payload.name, user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(AlbumDto::from(album))))
}

/// List an event's albums.
#[utoipa::path(
    get,
    path = "/api/media/events/{event_id}/albums",
    tag = MEDIA_TAG,
    params(("event_id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Albums", body = [AlbumDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn list_albums(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(event_id)])
        .await?;

    let albums = MediaService::new(&state.db).list_albums(event_id).await?;

    let albums: Vec<AlbumDto> = albums.into_iter().map(AlbumDto::from).collect();

    Ok((StatusCode::OK, Json(albums)))
}

/// Delete an album with its photos and their comments.
///
/// Allowed for the album's creator or an event organizer.
#[utoipa::path(
    delete,
    path = "/api/media/albums/{album_id}",
    tag = MEDIA_TAG,
    params(("album_id" = i32, Path, description = "Album id")),
    responses(
        (status = 204, description = "Album deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Organizer privileges required", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto)
    ),
)]
pub async fn delete_album(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(album_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MediaService::new(&state.db);

    let album = service.get_album(album_id).await?;

    if album.created_by_id != user.id {
        AuthGuard::new(&state.db)
            .require(&user, &[Permission::EventOrganizer(album.event_id)])
            .await?;
    }

    service.delete_album(album_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a photo to an album.
#[utoipa::path(
    post,
    path = "/api/media/albums/{album_id}/photos",
    tag = MEDIA_TAG,
    params(("album_id" = i32, Path, description = "Album id")),
    request_body = CreatePhotoDto,
    responses(
        (status = 201, description = "Photo added", body = PhotoDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto)
    ),
)]
pub async fn add_photo(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(album_id): Path<i32>,
    Json(payload): Json<CreatePhotoDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MediaService::new(&state.db);

    let album = service.get_album(album_id).await?;

    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(album.event_id)])
        .await?;

    let photo = service
        .add_photo(album.id, user.id, payload.url, payload.caption)
        .await?;

    Ok((StatusCode::CREATED, Json(PhotoDto::from(photo))))
}

/// List an album's photos.
#[utoipa::path(
    get,
    path = "/api/media/albums/{album_id}/photos",
    tag = MEDIA_TAG,
    params(("album_id" = i32, Path, description = "Album id")),
    responses(
        (status = 200, description = "Photos", body = [PhotoDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto)
    ),
)]
pub async fn list_photos(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(album_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MediaService::new(&state.db);

    let album = service.get_album(album_id).await?;

    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(album.event_id)])
        .await?;

    let photos = service.list_photos(album_id).await?;

    let photos: Vec<PhotoDto> = photos.into_iter().map(PhotoDto::from).collect();

    Ok((StatusCode::OK, Json(photos)))
}

/// Comment on a photo.
#[utoipa::path(
    post,
    path = "/api/media/photos/{photo_id}/comments",
    tag = MEDIA_TAG,
    params(("photo_id" = i32, Path, description = "Photo id")),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment added", body = CommentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(photo_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MediaService::new(&state.db);

    let photo = service.get_photo(photo_id).await?;
    let album = service.get_album(photo.album_id).await?;

    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(album.event_id)])
        .await?;

    let comment = service
        .add_comment(photo.id, user.id, payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentDto::from(comment))))
}

/// List a photo's comments.
#[utoipa::path(
    get,
    path = "/api/media/photos/{photo_id}/comments",
    tag = MEDIA_TAG,
    params(("photo_id" = i32, Path, description = "Photo id")),
    responses(
        (status = 200, description = "Comments", body = [CommentDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Event access required", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(photo_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MediaService::new(&state.db);

    let photo = service.get_photo(photo_id).await?;
    let album = service.get_album(photo.album_id).await?;

    AuthGuard::new(&state.db)
        .require(&user, &[Permission::EventAccess(album.event_id)])
        .await?;

    let comments = service.list_comments(photo_id).await?;

    let comments: Vec<CommentDto> = comments.into_iter().map(CommentDto::from).collect();

    Ok((StatusCode::OK, Json(comments)))
}
