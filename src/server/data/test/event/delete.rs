use super::*;

/// Tests that deleting an event removes its roster links through the
/// cascade.
///
/// Expected: Ok with no organizer or participant rows left
#[tokio::test]
async fn delete_cascades_to_rosters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let attendee = factory::user::create_user(db).await?;

    let repo = EventRepository::new(db);
    let event = repo.create(create_params(creator.id, vec![creator.id])).await?;
    factory::participation::create_participant(db, event.id, attendee.id).await?;

    repo.delete(event.id).await?;

    assert!(repo.find_by_id(event.id).await?.is_none());

    let organizers = entity::prelude::EventOrganizer::find()
        .filter(entity::event_organizer::Column::EventId.eq(event.id))
        .count(db)
        .await?;
    let participants = entity::prelude::EventParticipant::find()
        .filter(entity::event_participant::Column::EventId.eq(event.id))
        .count(db)
        .await?;

    assert_eq!(organizers, 0);
    assert_eq!(participants, 0);

    Ok(())
}
