use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateAlbumDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlbumDto {
    pub id: i32,
    pub name: String,
    pub event_id: i32,
    pub created_by_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<entity::photo_album::Model> for AlbumDto {
    fn from(album: entity::photo_album::Model) -> Self {
        Self {
            id: album.id,
            name: album.name,
            event_id: album.event_id,
            created_by_id: album.created_by_id,
            created_at: album.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreatePhotoDto {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoDto {
    pub id: i32,
    pub album_id: i32,
    pub uploaded_by_id: i32,
    pub url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::photo::Model> for PhotoDto {
    fn from(photo: entity::photo::Model) -> Self {
        Self {
            id: photo.id,
            album_id: photo.album_id,
            uploaded_by_id: photo.uploaded_by_id,
            url: photo.url,
            caption: photo.caption,
            created_at: photo.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub photo_id: i32,
    pub author_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<entity::photo_comment::Model> for CommentDto {
    fn from(comment: entity::photo_comment::Model) -> Self {
        Self {
            id: comment.id,
            photo_id: comment.photo_id,
            author_id: comment.author_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}
