use super::*;

/// Tests that repeated votes by one user on one question never create a
/// second row.
///
/// The overwrite policy is implemented as an upsert on the
/// (question_id, voter_id) unique key, so after any number of submissions
/// exactly one vote row exists and it carries the latest choice.
///
/// Expected: Ok with one row pointing at the last option voted for
#[tokio::test]
async fn revote_overwrites_instead_of_duplicating() -> Result<(), DbErr> {
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
    repo.cast_vote(question.id, no.id, voter.id).await?;
    repo.cast_vote(question.id, yes.id, voter.id).await?;

    let votes = entity::prelude::PollVote::find().all(db).await?;
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].question_id, question.id);
    assert_eq!(votes[0].voter_id, voter.id);
    assert_eq!(votes[0].option_id, yes.id);

    Ok(())
}

/// Tests that different voters on the same question each keep their own row.
///
/// Expected: Ok with one row per voter
#[tokio::test]
async fn distinct_voters_keep_distinct_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let poll = factory::poll::create_poll(db, event.id, user.id).await?;
    let question = factory::poll::create_question(db, poll.id).await?;
    let yes = factory::poll::create_option(db, question.id, "yes").await?;

    let repo = PollRepository::new(db);

    repo.cast_vote(question.id, yes.id, first.id).await?;
    repo.cast_vote(question.id, yes.id, second.id).await?;

    let votes = entity::prelude::PollVote::find().count(db).await?;
    assert_eq!(votes, 2);

    Ok(())
}
