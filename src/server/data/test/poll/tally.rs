use super::*;

/// Tests the tally after a first vote and after an overwriting re-vote.
///
/// Voting "yes" must give {yes: 1, no: 0}; switching to "no" must move the
/// single vote, never count both.
///
/// Expected: counts always sum to the number of voters
#[tokio::test]
async fn tally_follows_overwritten_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await?;
    let voter = factory::user::create_user(db).await?;
    let poll = factory::poll::create_poll(db, event.id, user.id).await?;
    let question = factory::poll::create_question(db, poll.id).await?;
    let yes = factory::poll::create_option(db, question.id, "yes").await?;
    let no = factory::poll::create_option(db, question.id, "no").await?;

    let repo = PollRepository::new(db);

    repo.cast_vote(question.id, yes.id, voter.id).await?;

    let counts = repo.tally(question.id).await?;
    assert_eq!(counts.get(&yes.id).copied().unwrap_or(0), 1);
    assert_eq!(counts.get(&no.id).copied().unwrap_or(0), 0);

    repo.cast_vote(question.id, no.id, voter.id).await?;

    let counts = repo.tally(question.id).await?;
    assert_eq!(counts.get(&yes.id).copied().unwrap_or(0), 0);
    assert_eq!(counts.get(&no.id).copied().unwrap_or(0), 1);

    Ok(())
}

/// Tests that tallies are scoped to their question.
///
/// Expected: votes on one question do not appear in another's tally
#[tokio::test]
async fn tally_is_scoped_to_question() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await?;
    let voter = factory::user::create_user(db).await?;
    let poll = factory::poll::create_poll(db, event.id, user.id).await?;
    let question_a = factory::poll::create_question(db, poll.id).await?;
    let question_b = factory::poll::create_question(db, poll.id).await?;
    let option_a = factory::poll::create_option(db, question_a.id, "yes").await?;
    factory::poll::create_option(db, question_b.id, "yes").await?;

    let repo = PollRepository::new(db);
    repo.cast_vote(question_a.id, option_a.id, voter.id).await?;

    let counts = repo.tally(question_b.id).await?;
    assert!(counts.is_empty());

    Ok(())
}
