use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::AuthService,
    util::token::TokenKeys,
};
use test_utils::builder::TestBuilder;

/// Tests that registration stores a hash, never the plain password.
///
/// Expected: Ok with an argon2 hash in the row
#[tokio::test]
async fn register_stores_only_a_hash() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = AuthService::new(db)
        .register(
            "owner@example.com".to_string(),
            "Owner One".to_string(),
            "StrongPass!1".to_string(),
        )
        .await?;

    assert_eq!(user.email, "owner@example.com");
    assert_ne!(user.password_hash, "StrongPass!1");
    assert!(user.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests that registering the same email twice fails on the second attempt.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn second_registration_with_same_email_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);

    service
        .register(
            "owner@example.com".to_string(),
            "Owner One".to_string(),
            "StrongPass!1".to_string(),
        )
        .await?;

    let result = service
        .register(
            "owner@example.com".to_string(),
            "Owner Two".to_string(),
            "OtherPass!2".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests the register-then-login roundtrip.
///
/// Expected: Ok with a token whose subject is the registered user
#[tokio::test]
async fn login_issues_token_for_registered_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let tokens = TokenKeys::new("test-secret", 60);

    let user = service
        .register(
            "attendee@example.com".to_string(),
            "Attendee Two".to_string(),
            "StrongPass!1".to_string(),
        )
        .await?;

    let token = service
        .login(&tokens, "attendee@example.com", "StrongPass!1")
        .await?;

    assert_eq!(tokens.verify(&token).unwrap(), user.id);

    Ok(())
}

/// Tests that a wrong password and an unknown email fail identically.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn login_rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let tokens = TokenKeys::new("test-secret", 60);

    service
        .register(
            "owner@example.com".to_string(),
            "Owner One".to_string(),
            "StrongPass!1".to_string(),
        )
        .await?;

    let wrong_password = service
        .login(&tokens, "owner@example.com", "WrongPass!9")
        .await;
    let unknown_email = service
        .login(&tokens, "nobody@example.com", "StrongPass!1")
        .await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
