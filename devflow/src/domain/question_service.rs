//! Question domain service.
//!
//! Owns the question lifecycle: authoring with tag upserts, content edits,
//! view tracking, the read side, and the deletion cascade. The cascade is
//! enumerated here explicitly; repositories only ever delete what they are
//! asked for. Steps are separate store calls with no compensating rollback,
//! so a failure part-way leaves the earlier steps applied.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use pagination::Paged;

use crate::domain::ports::{
    AnswerRepository, CreateQuestionRequest, CreateQuestionResponse, EditQuestionRequest,
    InteractionRepository, ListQuestionsRequest, QuestionCommand, QuestionQuery,
    QuestionRepository, TagRepository, UserRepository,
};
use crate::domain::{
    Error, Interaction, Question, QuestionDraft, QuestionEdit, QuestionId, ReputationEvent,
    TagName, UserId, Votable,
};

/// Most tags a single question may carry.
const MAX_TAGS: usize = 5;

/// Question service implementing the question driving ports.
#[derive(Clone)]
pub struct QuestionService<Q, A, T, U, I> {
    questions: Arc<Q>,
    answers: Arc<A>,
    tags: Arc<T>,
    users: Arc<U>,
    interactions: Arc<I>,
}

impl<Q, A, T, U, I> QuestionService<Q, A, T, U, I> {
    /// Create a new question service over the repositories the lifecycle
    /// touches.
    pub fn new(
        questions: Arc<Q>,
        answers: Arc<A>,
        tags: Arc<T>,
        users: Arc<U>,
        interactions: Arc<I>,
    ) -> Self {
        Self {
            questions,
            answers,
            tags,
            users,
            interactions,
        }
    }
}

impl<Q, A, T, U, I> QuestionService<Q, A, T, U, I>
where
    Q: QuestionRepository,
    A: AnswerRepository,
    T: TagRepository,
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
impl<Q, A, T, U, I> QuestionCommand for QuestionService<Q, A, T, U, I>
where
    Q: QuestionRepository,
    A: AnswerRepository,
    T: TagRepository,
    U: UserRepository,
    I: InteractionRepository,
{
    async fn create(
        &self,
        request: CreateQuestionRequest,
    ) -> Result<CreateQuestionResponse, Error> {
        if request.tags.is_empty() || request.tags.len() > MAX_TAGS {
            return Err(Error::invalid_request(format!(
                "a question carries between 1 and {MAX_TAGS} tags"
            )));
        }
        let names = request
            .tags
            .into_iter()
            .map(TagName::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let question = Question::new(QuestionDraft {
            id: QuestionId::random(),
            author_id: request.author_id,
            title: request.title,
            body: request.body,
            created_at: Utc::now(),
        })
        .map_err(|err| Error::invalid_request(err.to_string()))?;
        let question_id = question.id();

        self.questions.insert(&question).await?;

        let mut tag_ids = Vec::with_capacity(names.len());
        for name in &names {
            let tag_id = self.tags.upsert_for_question(name, question_id).await?;
            self.questions.add_tag(question_id, tag_id).await?;
            tag_ids.push(tag_id);
        }

        self.apply_reputation(request.author_id, ReputationEvent::QuestionAuthored)
            .await?;
        let record = Interaction::ask(request.author_id, question_id, tag_ids.clone(), Utc::now());
        self.interactions.insert(&record).await?;

        tracing::debug!(question = %question_id, tags = tag_ids.len(), "question created");
        Ok(CreateQuestionResponse {
            question_id,
            tag_ids,
        })
    }

    async fn edit(&self, request: EditQuestionRequest) -> Result<(), Error> {
        let edit = QuestionEdit::new(request.title, request.body)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let updated = self
            .questions
            .update_content(request.question_id, &edit)
            .await?;
        if !updated {
            return Err(Error::not_found(format!(
                "question {} not found",
                request.question_id
            )));
        }
        Ok(())
    }

    async fn delete(&self, question_id: QuestionId) -> Result<(), Error> {
        let question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("question {question_id} not found")))?;

        let removed = self.questions.delete(question_id).await?;
        if !removed {
            return Err(Error::not_found(format!("question {question_id} not found")));
        }

        let answer_ids = self.answers.delete_by_question(question_id).await?;
        self.interactions.delete_by_question(question_id).await?;
        if !answer_ids.is_empty() {
            self.interactions.delete_by_answers(&answer_ids).await?;
        }
        self.tags.pull_question(question_id).await?;
        self.apply_reputation(question.author_id(), ReputationEvent::QuestionDeleted)
            .await?;

        tracing::debug!(
            question = %question_id,
            answers = answer_ids.len(),
            "question cascade complete"
        );
        Ok(())
    }

    async fn record_view(
        &self,
        question_id: QuestionId,
        viewer_id: Option<UserId>,
    ) -> Result<(), Error> {
        let updated = self.questions.increment_views(question_id).await?;
        if !updated {
            return Err(Error::not_found(format!("question {question_id} not found")));
        }

        if let Some(viewer) = viewer_id {
            if !self.interactions.has_viewed(viewer, question_id).await? {
                let record = Interaction::view(viewer, question_id, Utc::now());
                self.interactions.insert(&record).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<Q, A, T, U, I> QuestionQuery for QuestionService<Q, A, T, U, I>
where
    Q: QuestionRepository,
    A: AnswerRepository,
    T: TagRepository,
    U: UserRepository,
    I: InteractionRepository,
{
    async fn get(&self, question_id: QuestionId) -> Result<Question, Error> {
        self.questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("question {question_id} not found")))
    }

    async fn list(&self, request: ListQuestionsRequest) -> Result<Paged<Question>, Error> {
        self.questions
            .list(request.search.as_deref(), request.page)
            .await
            .map_err(Into::into)
    }

    async fn hottest(&self, limit: usize) -> Result<Vec<Question>, Error> {
        self.questions.hottest(limit).await.map_err(Into::into)
    }
}

#[cfg(test)]
#[path = "question_service_tests.rs"]
mod question_service_tests;
