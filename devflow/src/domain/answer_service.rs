//! Answer domain service.
//!
//! Answer authoring credits the answerer only when they are not also the
//! question author; the same test gates the debit on deletion. As with the
//! question lifecycle, the steps are separate store calls with no rollback.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use pagination::Paged;

use crate::domain::ports::{
    AnswerCommand, AnswerQuery, AnswerRepository, CreateAnswerRequest, CreateAnswerResponse,
    InteractionRepository, ListAnswersRequest, QuestionRepository, UserRepository,
};
use crate::domain::{
    Answer, AnswerDraft, AnswerId, Error, Interaction, ReputationEvent, UserId, Votable,
};

/// Answer service implementing the answer driving ports.
#[derive(Clone)]
pub struct AnswerService<Q, A, U, I> {
    questions: Arc<Q>,
    answers: Arc<A>,
    users: Arc<U>,
    interactions: Arc<I>,
}

impl<Q, A, U, I> AnswerService<Q, A, U, I> {
    /// Create a new answer service.
    pub fn new(questions: Arc<Q>, answers: Arc<A>, users: Arc<U>, interactions: Arc<I>) -> Self {
        Self {
            questions,
            answers,
            users,
            interactions,
        }
    }
}

impl<Q, A, U, I> AnswerService<Q, A, U, I>
where
    Q: QuestionRepository,
    A: AnswerRepository,
    U: UserRepository,
    I: InteractionRepository,
{
    async fn apply_reputation(&self, user_id: UserId, event: ReputationEvent) -> Result<(), Error> {
        let updated = self.users.adjust_reputation(user_id, event.delta()).await?;
        if !updated {
            tracing::debug!(user = %user_id, delta = event.delta(), "reputation target missing, increment skipped");
        }
        Ok(())
    }
}

#[async_trait]
impl<Q, A, U, I> AnswerCommand for AnswerService<Q, A, U, I>
where
    Q: QuestionRepository,
    A: AnswerRepository,
    U: UserRepository,
    I: InteractionRepository,
{
    async fn create(&self, request: CreateAnswerRequest) -> Result<CreateAnswerResponse, Error> {
        let question_id = request.question_id;
        let question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("question {question_id} not found")))?;

        let answer = Answer::new(AnswerDraft {
            id: AnswerId::random(),
            author_id: request.author_id,
            question_id,
            body: request.body,
            created_at: Utc::now(),
        })
        .map_err(|err| Error::invalid_request(err.to_string()))?;
        let answer_id = answer.id();

        self.answers.insert(&answer).await?;
        let linked = self.questions.push_answer(question_id, answer_id).await?;
        if !linked {
            return Err(Error::not_found(format!("question {question_id} not found")));
        }

        if request.author_id == question.author_id() {
            tracing::debug!(answer = %answer_id, "answering own question awards no reputation");
        } else {
            self.apply_reputation(request.author_id, ReputationEvent::AnswerAuthored)
                .await?;
        }

        let record = Interaction::answer(
            request.author_id,
            question_id,
            answer_id,
            question.tag_ids().to_vec(),
            Utc::now(),
        );
        self.interactions.insert(&record).await?;

        Ok(CreateAnswerResponse { answer_id })
    }

    async fn delete(&self, answer_id: AnswerId) -> Result<(), Error> {
        let answer = self
            .answers
            .find_by_id(answer_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("answer {answer_id} not found")))?;
        let question = self.questions.find_by_id(answer.question_id()).await?;

        let removed = self.answers.delete(answer_id).await?;
        if !removed {
            return Err(Error::not_found(format!("answer {answer_id} not found")));
        }

        // The parent question may itself be mid-deletion; a failed pull is
        // not an error.
        self.questions
            .pull_answer(answer.question_id(), answer_id)
            .await?;
        self.interactions.delete_by_answers(&[answer_id]).await?;

        match question {
            Some(question) if question.author_id() != answer.author_id() => {
                self.apply_reputation(answer.author_id(), ReputationEvent::AnswerDeleted)
                    .await?;
            }
            _ => {}
        }
        Ok(())
    }
}

#[async_trait]
impl<Q, A, U, I> AnswerQuery for AnswerService<Q, A, U, I>
where
    Q: QuestionRepository,
    A: AnswerRepository,
    U: UserRepository,
    I: InteractionRepository,
{
    async fn list_for_question(
        &self,
        request: ListAnswersRequest,
    ) -> Result<Paged<Answer>, Error> {
        self.answers
            .list_by_question(request.question_id, request.sort, request.page)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
#[path = "answer_service_tests.rs"]
mod answer_service_tests;
