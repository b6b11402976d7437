use super::*;

/// Tests looking a user up by email address.
///
/// Expected: Ok(Some) for an existing address, Ok(None) otherwise
#[tokio::test]
async fn finds_existing_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_email(db, "carol@example.com").await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("carol@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let missing = repo.find_by_email("nobody@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}
