use super::*;

/// Tests that the poll, its questions and their options land together.
///
/// Expected: Ok with the whole structure visible through get_detail
#[tokio::test]
async fn creates_poll_with_questions_and_options() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await?;

    let repo = PollRepository::new(db);
    let poll = repo
        .create(CreatePollParams {
            event_id: event.id,
            title: "Catering".to_string(),
            created_by_id: user.id,
            questions: vec![
                CreateQuestionParams {
                    question: "Pizza or pasta?".to_string(),
                    options: vec!["pizza".to_string(), "pasta".to_string()],
                },
                CreateQuestionParams {
                    question: "Dessert?".to_string(),
                    options: vec!["yes".to_string(), "no".to_string()],
                },
            ],
        })
        .await?;

    assert!(poll.is_active);

    let detail = repo.get_detail(poll.id).await?.unwrap();
    assert_eq!(detail.questions.len(), 2);
    assert_eq!(detail.questions[0].options.len(), 2);
    assert!(detail
        .questions
        .iter()
        .flat_map(|q| q.options.iter())
        .all(|o| o.votes == 0));

    Ok(())
}
