use super::*;

/// Tests the full quota and duplicate-email behavior of a quota-1 type.
///
/// First purchase succeeds; the same email again is a duplicate; a different
/// email is turned away because the quota is spent.
///
/// Expected: Purchased, then AlreadyPurchased, then QuotaExhausted
#[tokio::test]
async fn enforces_quota_and_single_ticket_per_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, event) = create_event_with_organizer(db).await?;
    let ticket_type = factory::ticket::create_ticket_type(db, event.id, 1).await?;

    let repo = TicketRepository::new(db);

    let first = repo
        .purchase(&ticket_type, purchase_params("b@x.com"))
        .await?;
    assert!(matches!(first, PurchaseOutcome::Purchased(_)));

    let duplicate = repo
        .purchase(&ticket_type, purchase_params("b@x.com"))
        .await?;
    assert!(matches!(duplicate, PurchaseOutcome::AlreadyPurchased));

    let overflow = repo
        .purchase(&ticket_type, purchase_params("c@x.com"))
        .await?;
    assert!(matches!(overflow, PurchaseOutcome::QuotaExhausted));

    assert_eq!(repo.count_sold(ticket_type.id).await?, 1);

    Ok(())
}

/// Tests that the sold count never exceeds the quota across many attempts.
///
/// Expected: exactly `quota` purchases succeed
#[tokio::test]
async fn never_sells_past_quota() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, event) = create_event_with_organizer(db).await?;
    let ticket_type = factory::ticket::create_ticket_type(db, event.id, 3).await?;

    let repo = TicketRepository::new(db);

    let mut purchased = 0;
    for i in 0..6 {
        let outcome = repo
            .purchase(&ticket_type, purchase_params(&format!("buyer{}@x.com", i)))
            .await?;
        if matches!(outcome, PurchaseOutcome::Purchased(_)) {
            purchased += 1;
        }
    }

    assert_eq!(purchased, 3);
    assert_eq!(repo.count_sold(ticket_type.id).await?, 3);

    Ok(())
}

/// Tests that the same email may hold tickets of two different types.
///
/// Expected: both purchases succeed
#[tokio::test]
async fn same_email_may_buy_different_types() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, event) = create_event_with_organizer(db).await?;
    let standard = factory::ticket::create_ticket_type(db, event.id, 5).await?;
    let vip = factory::ticket::create_ticket_type(db, event.id, 5).await?;

    let repo = TicketRepository::new(db);

    let first = repo.purchase(&standard, purchase_params("b@x.com")).await?;
    let second = repo.purchase(&vip, purchase_params("b@x.com")).await?;

    assert!(matches!(first, PurchaseOutcome::Purchased(_)));
    assert!(matches!(second, PurchaseOutcome::Purchased(_)));

    Ok(())
}
