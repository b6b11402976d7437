use crate::server::{
    error::AppError,
    model::ticket::{CreateTicketTypeParams, PurchaseTicketParams},
    service::ticket::TicketService,
};
use test_utils::{builder::TestBuilder, factory};

fn purchase_params(email: &str) -> PurchaseTicketParams {
    PurchaseTicketParams {
        purchaser_first_name: "Bea".to_string(),
        purchaser_last_name: "Martin".to_string(),
        purchaser_email: email.to_string(),
        purchaser_address: None,
    }
}

async fn ticketing_event(
    db: &sea_orm::DatabaseConnection,
) -> (entity::user::Model, entity::event::Model) {
    let user = factory::user::create_user(db).await.unwrap();
    let event = factory::event::EventFactory::new(db, user.id)
        .ticketing_enabled(true)
        .build()
        .await
        .unwrap();
    factory::participation::create_organizer(db, event.id, user.id)
        .await
        .unwrap();
    (user, event)
}

/// Tests the feature-flag gate on ticket type creation.
///
/// Expected: Err(PreconditionFailed) when ticketing is disabled
#[tokio::test]
async fn create_type_requires_ticketing_enabled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let event = factory::event::create_event(db, user.id).await.unwrap();

    let result = TicketService::new(db)
        .create_type(CreateTicketTypeParams {
            event_id: event.id,
            name: "Standard".to_string(),
            price: 10.0,
            quantity: 50,
        })
        .await;

    assert!(matches!(result, Err(AppError::PreconditionFailed(_))));

    Ok(())
}

/// Tests the quota-1 purchase scenario end to end.
///
/// First email succeeds; the same email again is a 409-class conflict; a
/// different email hits the exhausted quota.
///
/// Expected: Ok, then Err(Conflict), then Err(PreconditionFailed)
#[tokio::test]
async fn purchase_enforces_quota_and_duplicate_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, event) = ticketing_event(db).await;
    let ticket_type = factory::ticket::create_ticket_type(db, event.id, 1)
        .await
        .unwrap();

    let service = TicketService::new(db);

    let ticket = service
        .purchase(ticket_type.id, purchase_params("b@x.com"))
        .await?;
    assert_eq!(ticket.purchaser_email, "b@x.com");

    let duplicate = service
        .purchase(ticket_type.id, purchase_params("b@x.com"))
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let overflow = service
        .purchase(ticket_type.id, purchase_params("c@x.com"))
        .await;
    assert!(matches!(overflow, Err(AppError::PreconditionFailed(_))));

    Ok(())
}

/// Tests that purchasing an unknown type is a plain not-found.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn purchase_unknown_type_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TicketService::new(db)
        .purchase(9999, purchase_params("b@x.com"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that disabling ticketing after sales blocks further purchases.
///
/// Expected: Err(PreconditionFailed)
#[tokio::test]
async fn purchase_respects_flag_turned_off() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let event = factory::event::create_event(db, user.id).await.unwrap();
    let ticket_type = factory::ticket::create_ticket_type(db, event.id, 10)
        .await
        .unwrap();

    let result = TicketService::new(db)
        .purchase(ticket_type.id, purchase_params("b@x.com"))
        .await;

    assert!(matches!(result, Err(AppError::PreconditionFailed(_))));

    Ok(())
}
