use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user profile by id.
    pub async fn get_by_id(&self, id: i32) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
