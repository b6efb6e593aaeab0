//! Unit tests for the answer service against mocked repositories.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;

use super::*;
use crate::domain::ports::{
    MockAnswerRepository, MockInteractionRepository, MockQuestionRepository, MockUserRepository,
};
use crate::domain::{ErrorCode, InteractionAction, Question, QuestionDraft, QuestionId};

type Service = AnswerService<
    MockQuestionRepository,
    MockAnswerRepository,
    MockUserRepository,
    MockInteractionRepository,
>;

struct Mocks {
    questions: MockQuestionRepository,
    answers: MockAnswerRepository,
    users: MockUserRepository,
    interactions: MockInteractionRepository,
}

impl Mocks {
    fn new() -> Self {
        Self {
            questions: MockQuestionRepository::new(),
            answers: MockAnswerRepository::new(),
            users: MockUserRepository::new(),
            interactions: MockInteractionRepository::new(),
        }
    }

    fn into_service(self) -> Service {
        AnswerService::new(
            Arc::new(self.questions),
            Arc::new(self.answers),
            Arc::new(self.users),
            Arc::new(self.interactions),
        )
    }
}

fn question_by(author_id: UserId) -> Question {
    Question::new(QuestionDraft {
        id: QuestionId::random(),
        author_id,
        title: "How do I borrow twice?".to_owned(),
        body: "The borrow checker rejects my second mutable borrow.".to_owned(),
        created_at: Utc::now(),
    })
    .expect("valid question")
}

fn answer_by(author_id: UserId, question_id: QuestionId) -> Answer {
    Answer::new(AnswerDraft {
        id: AnswerId::random(),
        author_id,
        question_id,
        body: "Use a scoped block to end the first borrow early.".to_owned(),
        created_at: Utc::now(),
    })
    .expect("valid answer")
}

#[tokio::test]
async fn answering_someone_elses_question_credits_the_answerer() {
    let asker = UserId::random();
    let answerer = UserId::random();
    let question = question_by(asker);
    let question_id = question.id();

    let mut mocks = Mocks::new();
    mocks
        .questions
        .expect_find_by_id()
        .with(eq(question_id))
        .returning(move |_| Ok(Some(question.clone())));
    mocks.answers.expect_insert().returning(|_| Ok(()));
    mocks
        .questions
        .expect_push_answer()
        .with(eq(question_id), mockall::predicate::always())
        .returning(|_, _| Ok(true));
    mocks
        .users
        .expect_adjust_reputation()
        .with(eq(answerer), eq(10))
        .times(1)
        .returning(|_, _| Ok(true));
    mocks
        .interactions
        .expect_insert()
        .withf(|record| record.action() == InteractionAction::Answer)
        .returning(|_| Ok(()));

    mocks
        .into_service()
        .create(CreateAnswerRequest {
            author_id: answerer,
            question_id,
            body: "Use a scoped block to end the first borrow early.".to_owned(),
        })
        .await
        .expect("create succeeds");
}

#[tokio::test]
async fn answering_your_own_question_awards_nothing() {
    let asker = UserId::random();
    let question = question_by(asker);
    let question_id = question.id();

    let mut mocks = Mocks::new();
    mocks
        .questions
        .expect_find_by_id()
        .returning(move |_| Ok(Some(question.clone())));
    mocks.answers.expect_insert().returning(|_| Ok(()));
    mocks
        .questions
        .expect_push_answer()
        .returning(|_, _| Ok(true));
    // No adjust_reputation expectation: a call fails the test.
    mocks.interactions.expect_insert().returning(|_| Ok(()));

    mocks
        .into_service()
        .create(CreateAnswerRequest {
            author_id: asker,
            question_id,
            body: "Use a scoped block to end the first borrow early.".to_owned(),
        })
        .await
        .expect("create succeeds");
}

#[tokio::test]
async fn answering_a_missing_question_is_not_found() {
    let mut mocks = Mocks::new();
    mocks.questions.expect_find_by_id().returning(|_| Ok(None));

    let error = mocks
        .into_service()
        .create(CreateAnswerRequest {
            author_id: UserId::random(),
            question_id: QuestionId::random(),
            body: "Use a scoped block to end the first borrow early.".to_owned(),
        })
        .await
        .expect_err("missing question");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn short_answer_bodies_are_rejected() {
    let question = question_by(UserId::random());
    let question_id = question.id();

    let mut mocks = Mocks::new();
    mocks
        .questions
        .expect_find_by_id()
        .returning(move |_| Ok(Some(question.clone())));

    let error = mocks
        .into_service()
        .create(CreateAnswerRequest {
            author_id: UserId::random(),
            question_id,
            body: "too short".to_owned(),
        })
        .await
        .expect_err("short body");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn deleting_an_answer_unlinks_and_debits_the_author() {
    let asker = UserId::random();
    let answerer = UserId::random();
    let question = question_by(asker);
    let question_id = question.id();
    let answer = answer_by(answerer, question_id);
    let answer_id = answer.id();

    let mut mocks = Mocks::new();
    mocks
        .answers
        .expect_find_by_id()
        .with(eq(answer_id))
        .returning(move |_| Ok(Some(answer.clone())));
    mocks
        .questions
        .expect_find_by_id()
        .with(eq(question_id))
        .returning(move |_| Ok(Some(question.clone())));
    mocks
        .answers
        .expect_delete()
        .with(eq(answer_id))
        .times(1)
        .returning(|_| Ok(true));
    mocks
        .questions
        .expect_pull_answer()
        .with(eq(question_id), eq(answer_id))
        .times(1)
        .returning(|_, _| Ok(true));
    mocks
        .interactions
        .expect_delete_by_answers()
        .withf(move |ids| ids == [answer_id])
        .times(1)
        .returning(|_| Ok(1));
    mocks
        .users
        .expect_adjust_reputation()
        .with(eq(answerer), eq(-10))
        .times(1)
        .returning(|_, _| Ok(true));

    mocks
        .into_service()
        .delete(answer_id)
        .await
        .expect("delete succeeds");
}

#[tokio::test]
async fn deleting_your_own_answer_on_your_own_question_skips_the_debit() {
    let asker = UserId::random();
    let question = question_by(asker);
    let question_id = question.id();
    let answer = answer_by(asker, question_id);
    let answer_id = answer.id();

    let mut mocks = Mocks::new();
    mocks
        .answers
        .expect_find_by_id()
        .returning(move |_| Ok(Some(answer.clone())));
    mocks
        .questions
        .expect_find_by_id()
        .returning(move |_| Ok(Some(question.clone())));
    mocks.answers.expect_delete().returning(|_| Ok(true));
    mocks
        .questions
        .expect_pull_answer()
        .returning(|_, _| Ok(true));
    mocks
        .interactions
        .expect_delete_by_answers()
        .returning(|_| Ok(1));
    // No adjust_reputation expectation: a call fails the test.

    mocks
        .into_service()
        .delete(answer_id)
        .await
        .expect("delete succeeds");
}

#[tokio::test]
async fn deleting_a_missing_answer_is_not_found() {
    let mut mocks = Mocks::new();
    mocks.answers.expect_find_by_id().returning(|_| Ok(None));

    let error = mocks
        .into_service()
        .delete(AnswerId::random())
        .await
        .expect_err("missing answer");

    assert_eq!(error.code(), ErrorCode::NotFound);
}
