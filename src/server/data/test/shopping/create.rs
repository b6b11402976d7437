use super::*;

/// Tests creating an item and looking it up by name within the event.
///
/// Expected: Ok; the name resolves in its own event and nowhere else
#[tokio::test]
async fn creates_item_and_finds_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_addon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await?;
    let (_other_user, other_event) = create_event_with_organizer(db).await?;

    let repo = ShoppingRepository::new(db);
    let item = repo
        .create(CreateShoppingItemParams {
            event_id: event.id,
            owner_id: user.id,
            name: "Napkins".to_string(),
            quantity: 4,
            arrival_time: Utc::now() + Duration::days(3),
        })
        .await?;

    assert_eq!(item.quantity, 4);

    assert!(repo.find_by_name(event.id, "Napkins").await?.is_some());
    assert!(repo.find_by_name(other_event.id, "Napkins").await?.is_none());

    Ok(())
}

/// Tests that the (event, name) unique key rejects a duplicate item name.
///
/// Expected: Err(unique violation) on the second insert
#[tokio::test]
async fn rejects_duplicate_name_in_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_addon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await?;

    let repo = ShoppingRepository::new(db);
    let params = CreateShoppingItemParams {
        event_id: event.id,
        owner_id: user.id,
        name: "Napkins".to_string(),
        quantity: 1,
        arrival_time: Utc::now() + Duration::days(3),
    };

    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
