//! Interaction repository backed by the in-memory store.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::ports::{InteractionRepository, StoreError};
use crate::domain::{AnswerId, Interaction, InteractionAction, QuestionId, TagId, UserId};

use super::MemoryStore;

#[async_trait]
impl InteractionRepository for MemoryStore {
    async fn insert(&self, interaction: &Interaction) -> Result<(), StoreError> {
        let mut store = self.inner.write().await;
        store.interactions.push(interaction.clone());
        Ok(())
    }

    async fn has_viewed(
        &self,
        user_id: UserId,
        question_id: QuestionId,
    ) -> Result<bool, StoreError> {
        let store = self.inner.read().await;
        Ok(store.interactions.iter().any(|record| {
            record.user_id() == user_id
                && record.action() == InteractionAction::View
                && record.question_id() == Some(question_id)
        }))
    }

    async fn delete_by_question(&self, question_id: QuestionId) -> Result<u64, StoreError> {
        let mut store = self.inner.write().await;
        let before = store.interactions.len();
        store
            .interactions
            .retain(|record| record.question_id() != Some(question_id));
        Ok((before - store.interactions.len()) as u64)
    }

    async fn delete_by_answers(&self, answer_ids: &[AnswerId]) -> Result<u64, StoreError> {
        let mut store = self.inner.write().await;
        let before = store.interactions.len();
        store.interactions.retain(|record| {
            record
                .answer_id()
                .is_none_or(|answer_id| !answer_ids.contains(&answer_id))
        });
        Ok((before - store.interactions.len()) as u64)
    }

    async fn top_tags_for_user(
        &self,
        user_id: UserId,
        limit: usize,
    ) -> Result<Vec<(TagId, u64)>, StoreError> {
        let store = self.inner.read().await;
        let mut counts: HashMap<TagId, u64> = HashMap::new();
        for record in store
            .interactions
            .iter()
            .filter(|record| record.user_id() == user_id)
        {
            for tag_id in record.tag_ids() {
                *counts.entry(*tag_id).or_default() += 1;
            }
        }

        let mut ranked: Vec<(TagId, u64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(limit);
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    //! View lookup and affinity ranking behaviour of the adapter.
    use chrono::Utc;

    use super::*;

    #[tokio::test]
    async fn has_viewed_only_matches_view_records() {
        let store = MemoryStore::new();
        let user = UserId::random();
        let question = QuestionId::random();
        store
            .insert(&Interaction::ask(user, question, Vec::new(), Utc::now()))
            .await
            .expect("insert");

        assert!(!store.has_viewed(user, question).await.expect("lookup"));

        store
            .insert(&Interaction::view(user, question, Utc::now()))
            .await
            .expect("insert");
        assert!(store.has_viewed(user, question).await.expect("lookup"));
    }

    #[tokio::test]
    async fn top_tags_rank_by_interaction_count() {
        let store = MemoryStore::new();
        let user = UserId::random();
        let favourite = TagId::random();
        let occasional = TagId::random();

        for _ in 0..3 {
            store
                .insert(&Interaction::ask(
                    user,
                    QuestionId::random(),
                    vec![favourite],
                    Utc::now(),
                ))
                .await
                .expect("insert");
        }
        store
            .insert(&Interaction::ask(
                user,
                QuestionId::random(),
                vec![occasional],
                Utc::now(),
            ))
            .await
            .expect("insert");
        // Another user's records never count.
        store
            .insert(&Interaction::ask(
                UserId::random(),
                QuestionId::random(),
                vec![occasional],
                Utc::now(),
            ))
            .await
            .expect("insert");

        let ranked = store.top_tags_for_user(user, 2).await.expect("rank");
        assert_eq!(ranked, vec![(favourite, 3), (occasional, 1)]);
    }

    #[tokio::test]
    async fn answer_sweeps_leave_unrelated_records() {
        let store = MemoryStore::new();
        let user = UserId::random();
        let question = QuestionId::random();
        let answer = AnswerId::random();
        store
            .insert(&Interaction::answer(
                user,
                question,
                answer,
                Vec::new(),
                Utc::now(),
            ))
            .await
            .expect("insert");
        store
            .insert(&Interaction::view(user, question, Utc::now()))
            .await
            .expect("insert");

        let removed = store.delete_by_answers(&[answer]).await.expect("sweep");
        assert_eq!(removed, 1);
        assert!(store.has_viewed(user, question).await.expect("lookup"));
    }
}
