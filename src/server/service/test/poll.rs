use crate::server::{
    error::AppError,
    model::poll::{CreatePollParams, CreateQuestionParams},
    service::poll::PollService,
};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_event_with_organizer};

fn poll_params(event_id: i32, created_by_id: i32) -> CreatePollParams {
    CreatePollParams {
        event_id,
        title: "Catering".to_string(),
        created_by_id,
        questions: vec![CreateQuestionParams {
            question: "Pizza or pasta?".to_string(),
            options: vec!["pizza".to_string(), "pasta".to_string()],
        }],
    }
}

/// Tests the feature-flag gate: a poll on an event with polls disabled is a
/// business-rule failure, not a validation error.
///
/// Expected: Err(PreconditionFailed)
#[tokio::test]
async fn create_requires_polls_enabled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let event = factory::event::EventFactory::new(db, user.id)
        .polls_enabled(false)
        .build()
        .await
        .unwrap();
    factory::participation::create_organizer(db, event.id, user.id)
        .await
        .unwrap();

    let result = PollService::new(db).create(poll_params(event.id, user.id)).await;

    assert!(matches!(result, Err(AppError::PreconditionFailed(_))));

    Ok(())
}

/// Tests that a poll without questions is rejected.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn create_requires_questions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await.unwrap();

    let mut params = poll_params(event.id, user.id);
    params.questions.clear();

    let result = PollService::new(db).create(params).await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that every question needs at least two options.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn create_requires_two_options_per_question() -> Result<(), AppError> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await.unwrap();

    let mut params = poll_params(event.id, user.id);
    params.questions[0].options.truncate(1);

    let result = PollService::new(db).create(params).await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that a closed poll rejects ballots.
///
/// Expected: Err(PreconditionFailed)
#[tokio::test]
async fn cast_votes_rejects_closed_poll() -> Result<(), AppError> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await.unwrap();
    let poll = factory::poll::PollFactory::new(db, event.id, user.id)
        .is_active(false)
        .build()
        .await
        .unwrap();
    let question = factory::poll::create_question(db, poll.id).await.unwrap();
    let option = factory::poll::create_option(db, question.id, "yes").await.unwrap();

    let result = PollService::new(db)
        .cast_votes(poll.id, vec![(question.id, option.id)], user.id)
        .await;

    assert!(matches!(result, Err(AppError::PreconditionFailed(_))));

    Ok(())
}

/// Tests that a ballot naming a question from another poll is rejected.
///
/// Expected: Err(Validation), and no vote row is recorded
#[tokio::test]
async fn cast_votes_rejects_foreign_question() -> Result<(), AppError> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await.unwrap();
    let poll = factory::poll::create_poll(db, event.id, user.id).await.unwrap();
    let other_poll = factory::poll::create_poll(db, event.id, user.id).await.unwrap();
    let foreign_question = factory::poll::create_question(db, other_poll.id).await.unwrap();
    let foreign_option = factory::poll::create_option(db, foreign_question.id, "yes")
        .await
        .unwrap();

    let result = PollService::new(db)
        .cast_votes(poll.id, vec![(foreign_question.id, foreign_option.id)], user.id)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests the end-to-end voting scenario through the service: vote "yes",
/// check the tally, switch to "no", check the single vote moved.
///
/// Expected: tallies of {yes: 1, no: 0} then {yes: 0, no: 1}
#[tokio::test]
async fn revote_moves_the_single_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, event) = create_event_with_organizer(db).await.unwrap();
    let voter = factory::user::create_user(db).await.unwrap();
    factory::participation::create_participant(db, event.id, voter.id)
        .await
        .unwrap();

    let service = PollService::new(db);

    let poll = service.create(poll_params(event.id, organizer.id)).await?;

    let detail = service.get_detail(poll.id).await?;
    let question = &detail.questions[0];
    let pizza = question.options[0].option.id;
    let pasta = question.options[1].option.id;

    let after_first = service
        .cast_votes(poll.id, vec![(question.question.id, pizza)], voter.id)
        .await?;
    let options = &after_first.questions[0].options;
    assert_eq!(options[0].votes, 1);
    assert_eq!(options[1].votes, 0);

    let after_second = service
        .cast_votes(poll.id, vec![(question.question.id, pasta)], voter.id)
        .await?;
    let options = &after_second.questions[0].options;
    assert_eq!(options[0].votes, 0);
    assert_eq!(options[1].votes, 1);

    Ok(())
}
