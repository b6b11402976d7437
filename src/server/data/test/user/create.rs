use super::*;

/// Tests creating a user with the basic account fields.
///
/// Expected: Ok with the row persisted and active by default
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "alice@example.com".to_string(),
            "Alice Example".to_string(),
            "hash".to_string(),
        )
        .await?;

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.full_name, "Alice Example");
    assert!(user.is_active);

    let found = repo.find_by_id(user.id).await?;
    assert!(found.is_some());

    Ok(())
}

/// Tests that a second user with the same email is rejected by the unique
/// index.
///
/// Expected: Err on the second insert, one row for the address
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(
        "bob@example.com".to_string(),
        "Bob One".to_string(),
        "hash-1".to_string(),
    )
    .await?;

    let result = repo
        .create(
            "bob@example.com".to_string(),
            "Bob Two".to_string(),
            "hash-2".to_string(),
        )
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
