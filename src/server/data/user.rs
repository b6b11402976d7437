use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user row. The caller is responsible for hashing the
    /// password and for handling the unique-email violation.
    pub async fn create(
        &self,
        email: String,
        full_name: String,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            full_name: ActiveValue::Set(full_name),
            password_hash: ActiveValue::Set(password_hash),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
