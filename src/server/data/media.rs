use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

pub struct MediaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_album(
        &self,
        event_id: i32,
        name: String,
        created_by_id: i32,
    ) -> Result<entity::photo_album::Model, DbErr> {
        entity::photo_album::ActiveModel {
            name: ActiveValue::Set(name),
            event_id: ActiveValue::Set(event_id),
            created_by_id: ActiveValue::Set(created_by_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_album(&self, id: i32) -> Result<Option<entity::photo_album::Model>, DbErr> {
        entity::prelude::PhotoAlbum::find_by_id(id).one(self.db).await
    }

    pub async fn get_albums(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::photo_album::Model>, DbErr> {
        entity::prelude::PhotoAlbum::find()
            .filter(entity::photo_album::Column::EventId.eq(event_id))
            .order_by_asc(entity::photo_album::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes an album with its photos and their comments in one
    /// transaction, so no child row can outlive the album.
    pub async fn delete_album(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let photo_ids: Vec<i32> = entity::prelude::Photo::find()
            .filter(entity::photo::Column::AlbumId.eq(id))
            .select_only()
            .column(entity::photo::Column::Id)
            .into_tuple()
            .all(&txn)
            .await?;

        if !photo_ids.is_empty() {
            entity::prelude::PhotoComment::delete_many()
                .filter(entity::photo_comment::Column::PhotoId.is_in(photo_ids))
                .exec(&txn)
                .await?;

            entity::prelude::Photo::delete_many()
                .filter(entity::photo::Column::AlbumId.eq(id))
                .exec(&txn)
                .await?;
        }

        entity::prelude::PhotoAlbum::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }

    pub async fn add_photo(
        &self,
        album_id: i32,
        uploaded_by_id: i32,
        url: String,
        caption: Option<String>,
    ) -> Result<entity::photo::Model, DbErr> {
        entity::photo::ActiveModel {
            album_id: ActiveValue::Set(album_id),
            uploaded_by_id: ActiveValue::Set(uploaded_by_id),
            url: ActiveValue::Set(url),
            caption: ActiveValue::Set(caption),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_photo(&self, id: i32) -> Result<Option<entity::photo::Model>, DbErr> {
        entity::prelude::Photo::find_by_id(id).one(self.db).await
    }

    pub async fn get_photos(&self, album_id: i32) -> Result<Vec<entity::photo::Model>, DbErr> {
        entity::prelude::Photo::find()
            .filter(entity::photo::Column::AlbumId.eq(album_id))
            .order_by_asc(entity::photo::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn add_comment(
        &self,
        photo_id: i32,
        author_id: i32,
        content: String,
    ) -> Result<entity::photo_comment::Model, DbErr> {
        entity::photo_comment::ActiveModel {
            photo_id: ActiveValue::Set(photo_id),
            author_id: ActiveValue::Set(author_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_comments(
        &self,
        photo_id: i32,
    ) -> Result<Vec<entity::photo_comment::Model>, DbErr> {
        entity::prelude::PhotoComment::find()
            .filter(entity::photo_comment::Column::PhotoId.eq(photo_id))
            .order_by_asc(entity::photo_comment::Column::Id)
            .all(self.db)
            .await
    }
}
