//! Album, photo and comment factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a photo album on an event.
pub async fn create_album(
    db: &DatabaseConnection,
    event_id: i32,
    created_by_id: i32,
) -> Result<entity::photo_album::Model, DbErr> {
    entity::photo_album::ActiveModel {
        name: ActiveValue::Set(format!("Album {}", next_id())),
        event_id: ActiveValue::Set(event_id),
        created_by_id: ActiveValue::Set(created_by_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a photo in an album.
pub async fn create_photo(
    db: &DatabaseConnection,
    album_id: i32,
    uploaded_by_id: i32,
) -> Result<entity::photo::Model, DbErr> {
    let id = next_id();
    entity::photo::ActiveModel {
        album_id: ActiveValue::Set(album_id),
        uploaded_by_id: ActiveValue::Set(uploaded_by_id),
        url: ActiveValue::Set(format!("https://example.com/photos/{}.jpg", id)),
        caption: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a comment on a photo.
pub async fn create_comment(
    db: &DatabaseConnection,
    photo_id: i32,
    author_id: i32,
) -> Result<entity::photo_comment::Model, DbErr> {
    entity::photo_comment::ActiveModel {
        photo_id: ActiveValue::Set(photo_id),
        author_id: ActiveValue::Set(author_id),
        content: ActiveValue::Set(format!("Comment {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
