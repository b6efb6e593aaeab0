//! User repository backed by the in-memory store.

use async_trait::async_trait;

use crate::domain::ports::{StoreError, UserRepository};
use crate::domain::{QuestionId, User, UserId};

use super::{MemoryStore, compile_filter};

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut store = self.inner.write().await;
        store.users.insert(user.id(), user.clone());
        tracing::debug!(user = %user.id(), "user inserted");
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let store = self.inner.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn adjust_reputation(&self, id: UserId, delta: i64) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        match store.users.get_mut(&id) {
            Some(user) => {
                user.adjust_reputation(delta);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn add_saved_question(
        &self,
        id: UserId,
        question_id: QuestionId,
    ) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        match store.users.get_mut(&id) {
            Some(user) => {
                user.save_question(question_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_saved_question(
        &self,
        id: UserId,
        question_id: QuestionId,
    ) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        match store.users.get_mut(&id) {
            Some(user) => {
                user.unsave_question(question_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        Ok(store.users.remove(&id).is_some())
    }

    async fn search_display_names(
        &self,
        needle: &str,
        limit: usize,
    ) -> Result<Vec<User>, StoreError> {
        let filter = compile_filter(needle)?;
        let store = self.inner.read().await;
        let mut matching: Vec<User> = store
            .users
            .values()
            .filter(|user| filter.matches(user.display_name().as_ref()))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.id().cmp(&b.id()));
        matching.truncate(limit);
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    //! Reputation and saved-set behaviour of the adapter.
    use chrono::Utc;

    use super::*;
    use crate::domain::DisplayName;

    fn some_user() -> User {
        User::new(
            UserId::random(),
            DisplayName::new("Grace Hopper").expect("valid name"),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn reputation_adjustments_accumulate() {
        let store = MemoryStore::new();
        let user = some_user();
        let id = user.id();
        store.insert(&user).await.expect("insert");

        store.adjust_reputation(id, 10).await.expect("adjust");
        store.adjust_reputation(id, -12).await.expect("adjust");

        let stored = store.find_by_id(id).await.expect("find").expect("present");
        assert_eq!(stored.reputation(), -2);
    }

    #[tokio::test]
    async fn adjusting_a_missing_user_reports_false() {
        let store = MemoryStore::new();
        let updated = store
            .adjust_reputation(UserId::random(), 5)
            .await
            .expect("adjust");
        assert!(!updated);
    }
}
