//! Port for user persistence.
//!
//! Reputation adjustments and saved-set changes are expressed as atomic
//! single-document operations; there is no read-modify-write on the caller
//! side.

use async_trait::async_trait;

use crate::domain::{QuestionId, User, UserId};

use super::StoreError;

/// Port for user storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a freshly registered user.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    /// Fetch a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Atomically add `delta` to a user's reputation.
    async fn adjust_reputation(&self, id: UserId, delta: i64) -> Result<bool, StoreError>;

    /// Add a question to the user's saved set.
    async fn add_saved_question(
        &self,
        id: UserId,
        question_id: QuestionId,
    ) -> Result<bool, StoreError>;

    /// Remove a question from the user's saved set.
    async fn remove_saved_question(
        &self,
        id: UserId,
        question_id: QuestionId,
    ) -> Result<bool, StoreError>;

    /// Delete a user document.
    async fn delete(&self, id: UserId) -> Result<bool, StoreError>;

    /// Users whose display name matches the needle, for global search.
    async fn search_display_names(
        &self,
        needle: &str,
        limit: usize,
    ) -> Result<Vec<User>, StoreError>;
}

/// Fixture implementation holding no users.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn insert(&self, _user: &User) -> Result<(), StoreError> {
        Ok(())
    }

    async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, StoreError> {
        Ok(None)
    }

    async fn adjust_reputation(&self, _id: UserId, _delta: i64) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn add_saved_question(
        &self,
        _id: UserId,
        _question_id: QuestionId,
    ) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn remove_saved_question(
        &self,
        _id: UserId,
        _question_id: QuestionId,
    ) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn delete(&self, _id: UserId) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn search_display_names(
        &self,
        _needle: &str,
        _limit: usize,
    ) -> Result<Vec<User>, StoreError> {
        Ok(Vec::new())
    }
}
