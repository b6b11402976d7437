use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, media::MediaRepository},
    error::AppError,
};

pub struct MediaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn require_event(&self, event_id: i32) -> Result<entity::event::Model, AppError> {
        EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Creates an album under an event.
    pub async fn create_album(
        &self,
        event_id: i32,
        name: String,
        created_by_id: i32,
    ) -> Result<entity::photo_album::Model, AppError> {
        self.require_event(event_id).await?;

        Ok(MediaRepository::new(self.db)
            .create_album(event_id, name, created_by_id)
            .await?)
    }

    pub async fn list_albums(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::photo_album::Model>, AppError> {
        self.require_event(event_id).await?;

        Ok(MediaRepository::new(self.db).get_albums(event_id).await?)
    }

    pub async fn get_album(&self, album_id: i32) -> Result<entity::photo_album::Model, AppError> {
        MediaRepository::new(self.db)
            .find_album(album_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Album not found".to_string()))
    }

    /// Deletes an album with its photos and their comments.
    pub async fn delete_album(&self, album_id: i32) -> Result<(), AppError> {
        Ok(MediaRepository::new(self.db).delete_album(album_id).await?)
    }

    pub async fn add_photo(
        &self,
        album_id: i32,
        uploaded_by_id: i32,
        url: String,
        caption: Option<String>,
    ) -> Result<entity::photo::Model, AppError> {
        Ok(MediaRepository::new(self.db)
            .add_photo(album_id, uploaded_by_id, url, caption)
            .await?)
    }

    pub async fn list_photos(&self, album_id: i32) -> Result<Vec<entity::photo::Model>, AppError> {
        Ok(MediaRepository::new(self.db).get_photos(album_id).await?)
    }

    pub async fn get_photo(&self, photo_id: i32) -> Result<entity::photo::Model, AppError> {
        MediaRepository::new(self.db)
            .find_photo(photo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))
    }

    pub async fn add_comment(
        &self,
        photo_id: i32,
        author_id: i32,
        content: String,
    ) -> Result<entity::photo_comment::Model, AppError> {
        Ok(MediaRepository::new(self.db)
            .add_comment(photo_id, author_id, content)
            .await?)
    }

    pub async fn list_comments(
        &self,
        photo_id: i32,
    ) -> Result<Vec<entity::photo_comment::Model>, AppError> {
        Ok(MediaRepository::new(self.db).get_comments(photo_id).await?)
    }
}
