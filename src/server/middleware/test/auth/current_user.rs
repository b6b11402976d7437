use super::*;

use axum::{extract::FromRequestParts, http::Request};
use sea_orm::DatabaseConnection;

use crate::server::{state::AppState, util::token::TokenKeys};

fn state_for(db: &DatabaseConnection) -> AppState {
    AppState::new(db.clone(), TokenKeys::new("test-secret", 60))
}

async fn extract_with_header(
    state: &AppState,
    header: Option<String>,
) -> Result<CurrentUser, AppError> {
    let mut builder = Request::builder().uri("/api/users/me");
    if let Some(value) = header {
        builder = builder.header("Authorization", value);
    }
    let request = builder.body(()).unwrap();
    let (mut parts, _) = request.into_parts();

    CurrentUser::from_request_parts(&mut parts, state).await
}

/// Tests the full identity pipeline for a valid token.
///
/// Expected: Ok with the token subject's user row
#[tokio::test]
async fn resolves_user_from_bearer_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let state = state_for(db);
    let token = state.tokens.issue(user.id)?;

    let result = extract_with_header(&state, Some(format!("Bearer {}", token))).await;

    let CurrentUser(resolved) = result?;
    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.email, user.email);

    Ok(())
}

/// Tests that a missing Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state_for(db);

    let result = extract_with_header(&state, None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that a non-bearer scheme is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state_for(db);

    let result = extract_with_header(&state, Some("Basic dXNlcjpwdw==".to_string())).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_forged_token() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let state = state_for(db);
    let forged = TokenKeys::new("other-secret", 60).issue(user.id).unwrap();

    let result = extract_with_header(&state, Some(format!("Bearer {}", forged))).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests that a token whose subject no longer exists is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_for_deleted_user() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state_for(db);

    let token = state.tokens.issue(4242).unwrap();

    let result = extract_with_header(&state, Some(format!("Bearer {}", token))).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));
}

/// Tests that a deactivated account cannot authenticate.
///
/// Expected: Err(AuthError::InactiveUser)
#[tokio::test]
async fn rejects_inactive_user() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .is_active(false)
        .build()
        .await
        .unwrap();
    let state = state_for(db);
    let token = state.tokens.issue(user.id).unwrap();

    let result = extract_with_header(&state, Some(format!("Bearer {}", token))).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InactiveUser))
    ));
}
