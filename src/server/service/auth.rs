use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    util::{password, token::TokenKeys},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// The email must be free; the password is argon2-hashed before anything
    /// touches the database and is dropped with the request body.
    pub async fn register(
        &self,
        email: String,
        full_name: String,
        password: String,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = password::hash_password(&password)?;

        let user = match repo.create(email, full_name, password_hash).await {
            Ok(user) => user,
            // Two concurrent registrations for the same email: the unique
            // index rejects the loser.
            Err(err)
                if matches!(
                    err.sql_err(),
                    Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
                ) =>
            {
                return Err(AppError::Conflict("Email already registered".to_string()))
            }
            Err(err) => return Err(err.into()),
        };

        Ok(user)
    }

    /// Verifies credentials and issues a signed, time-limited token.
    ///
    /// Unknown email and wrong password fail identically so the response
    /// does not reveal which accounts exist.
    pub async fn login(
        &self,
        tokens: &TokenKeys,
        email: &str,
        password: &str,
    ) -> Result<String, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        tokens.issue(user.id)
    }
}
