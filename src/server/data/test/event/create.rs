use super::*;

/// Tests that the event row and all organizer links land together.
///
/// Expected: Ok with one organizer row per id
#[tokio::test]
async fn creates_event_with_organizer_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let co_organizer = factory::user::create_user(db).await?;

    let repo = EventRepository::new(db);
    let event = repo
        .create(create_params(creator.id, vec![creator.id, co_organizer.id]))
        .await?;

    assert_eq!(event.name, "Launch Event");
    assert!(event.ticketing_enabled);

    let organizers = entity::prelude::EventOrganizer::find()
        .filter(entity::event_organizer::Column::EventId.eq(event.id))
        .count(db)
        .await?;
    assert_eq!(organizers, 2);

    Ok(())
}

/// Tests that a failed organizer link rolls back the event row.
///
/// The second organizer id is repeated, which trips the unique key inside
/// the creation transaction.
///
/// Expected: Err, and no event row is left behind
#[tokio::test]
async fn rolls_back_event_when_organizer_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;

    let repo = EventRepository::new(db);
    let result = repo
        .create(create_params(creator.id, vec![creator.id, creator.id]))
        .await;

    assert!(result.is_err());

    let events = entity::prelude::Event::find().count(db).await?;
    assert_eq!(events, 0);

    Ok(())
}

/// Tests fetching an event with both rosters.
///
/// Expected: Ok(Some) with organizers and participants populated
#[tokio::test]
async fn gets_event_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let attendee = factory::user::create_user(db).await?;

    let repo = EventRepository::new(db);
    let event = repo.create(create_params(creator.id, vec![creator.id])).await?;
    factory::participation::create_participant(db, event.id, attendee.id).await?;

    let detail = repo.get_with_relations(event.id).await?.unwrap();

    assert_eq!(detail.organizers.len(), 1);
    assert_eq!(detail.participants.len(), 1);
    assert_eq!(detail.participants[0].user_id, attendee.id);

    Ok(())
}
