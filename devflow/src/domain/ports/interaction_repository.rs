//! Port for interaction (activity) record persistence.

use async_trait::async_trait;

use crate::domain::{AnswerId, Interaction, QuestionId, TagId, UserId};

use super::StoreError;

/// Port for interaction record storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Append an interaction record.
    async fn insert(&self, interaction: &Interaction) -> Result<(), StoreError>;

    /// Whether the user already has a view record for this question.
    async fn has_viewed(
        &self,
        user_id: UserId,
        question_id: QuestionId,
    ) -> Result<bool, StoreError>;

    /// Delete every record referencing the question. Returns the number of
    /// records removed.
    async fn delete_by_question(&self, question_id: QuestionId) -> Result<u64, StoreError>;

    /// Delete every record referencing any of the given answers. Returns
    /// the number of records removed.
    async fn delete_by_answers(&self, answer_ids: &[AnswerId]) -> Result<u64, StoreError>;

    /// The user's most interacted tags, ranked by record count descending.
    async fn top_tags_for_user(
        &self,
        user_id: UserId,
        limit: usize,
    ) -> Result<Vec<(TagId, u64)>, StoreError>;
}

/// Fixture implementation holding no records.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInteractionRepository;

#[async_trait]
impl InteractionRepository for FixtureInteractionRepository {
    async fn insert(&self, _interaction: &Interaction) -> Result<(), StoreError> {
        Ok(())
    }

    async fn has_viewed(
        &self,
        _user_id: UserId,
        _question_id: QuestionId,
    ) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn delete_by_question(&self, _question_id: QuestionId) -> Result<u64, StoreError> {
        Ok(0)
    }

    async fn delete_by_answers(&self, _answer_ids: &[AnswerId]) -> Result<u64, StoreError> {
        Ok(0)
    }

    async fn top_tags_for_user(
        &self,
        _user_id: UserId,
        _limit: usize,
    ) -> Result<Vec<(TagId, u64)>, StoreError> {
        Ok(Vec::new())
    }
}
