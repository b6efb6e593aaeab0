//! Port for answer persistence.

use async_trait::async_trait;
use pagination::{PageRequest, Paged};

use crate::domain::{Answer, AnswerId, AnswerSort, MembershipChange, QuestionId, UserId};

use super::StoreError;

/// Port for answer storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Insert a freshly created answer.
    async fn insert(&self, answer: &Answer) -> Result<(), StoreError>;

    /// Fetch an answer by id.
    async fn find_by_id(&self, id: AnswerId) -> Result<Option<Answer>, StoreError>;

    /// Apply a vote-set membership change for one voter.
    async fn apply_vote(
        &self,
        id: AnswerId,
        voter: UserId,
        change: MembershipChange,
    ) -> Result<bool, StoreError>;

    /// Delete an answer document.
    async fn delete(&self, id: AnswerId) -> Result<bool, StoreError>;

    /// Delete every answer under a question, returning the removed ids so
    /// the caller can sweep records referencing them.
    async fn delete_by_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<AnswerId>, StoreError>;

    /// List the answers under a question in the requested order.
    async fn list_by_question(
        &self,
        question_id: QuestionId,
        sort: AnswerSort,
        page: PageRequest,
    ) -> Result<Paged<Answer>, StoreError>;

    /// Answers whose body matches the needle, for global search.
    async fn search_bodies(&self, needle: &str, limit: usize) -> Result<Vec<Answer>, StoreError>;
}

/// Fixture implementation holding no answers.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAnswerRepository;

#[async_trait]
impl AnswerRepository for FixtureAnswerRepository {
    async fn insert(&self, _answer: &Answer) -> Result<(), StoreError> {
        Ok(())
    }

    async fn find_by_id(&self, _id: AnswerId) -> Result<Option<Answer>, StoreError> {
        Ok(None)
    }

    async fn apply_vote(
        &self,
        _id: AnswerId,
        _voter: UserId,
        _change: MembershipChange,
    ) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn delete(&self, _id: AnswerId) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn delete_by_question(
        &self,
        _question_id: QuestionId,
    ) -> Result<Vec<AnswerId>, StoreError> {
        Ok(Vec::new())
    }

    async fn list_by_question(
        &self,
        _question_id: QuestionId,
        _sort: AnswerSort,
        _page: PageRequest,
    ) -> Result<Paged<Answer>, StoreError> {
        Ok(Paged::empty())
    }

    async fn search_bodies(
        &self,
        _needle: &str,
        _limit: usize,
    ) -> Result<Vec<Answer>, StoreError> {
        Ok(Vec::new())
    }
}
