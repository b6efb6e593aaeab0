//! Answer repository backed by the in-memory store.

use std::cmp::Ordering;

use async_trait::async_trait;
use pagination::{PageRequest, Paged};

use crate::domain::ports::{AnswerRepository, StoreError};
use crate::domain::{Answer, AnswerId, AnswerSort, MembershipChange, QuestionId, UserId};

use super::{MemoryStore, compile_filter};

fn compare(sort: AnswerSort, a: &Answer, b: &Answer) -> Ordering {
    let ordering = match sort {
        AnswerSort::HighestUpvotes => b.upvote_count().cmp(&a.upvote_count()),
        AnswerSort::LowestUpvotes => a.upvote_count().cmp(&b.upvote_count()),
        AnswerSort::Recent => b.created_at().cmp(&a.created_at()),
        AnswerSort::Old => a.created_at().cmp(&b.created_at()),
    };
    ordering.then_with(|| b.id().cmp(&a.id()))
}

#[async_trait]
impl AnswerRepository for MemoryStore {
    async fn insert(&self, answer: &Answer) -> Result<(), StoreError> {
        let mut store = self.inner.write().await;
        store.answers.insert(answer.id(), answer.clone());
        tracing::debug!(answer = %answer.id(), "answer inserted");
        Ok(())
    }

    async fn find_by_id(&self, id: AnswerId) -> Result<Option<Answer>, StoreError> {
        let store = self.inner.read().await;
        Ok(store.answers.get(&id).cloned())
    }

    async fn apply_vote(
        &self,
        id: AnswerId,
        voter: UserId,
        change: MembershipChange,
    ) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        match store.answers.get_mut(&id) {
            Some(answer) => {
                let (upvoters, downvoters) = answer.vote_sets_mut();
                change.apply(voter, upvoters, downvoters);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: AnswerId) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        Ok(store.answers.remove(&id).is_some())
    }

    async fn delete_by_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<AnswerId>, StoreError> {
        let mut store = self.inner.write().await;
        let doomed: Vec<AnswerId> = store
            .answers
            .values()
            .filter(|answer| answer.question_id() == question_id)
            .map(Answer::id)
            .collect();
        for id in &doomed {
            store.answers.remove(id);
        }
        Ok(doomed)
    }

    async fn list_by_question(
        &self,
        question_id: QuestionId,
        sort: AnswerSort,
        page: PageRequest,
    ) -> Result<Paged<Answer>, StoreError> {
        let store = self.inner.read().await;
        let mut matching: Vec<Answer> = store
            .answers
            .values()
            .filter(|answer| answer.question_id() == question_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| compare(sort, a, b));

        let total = matching.len();
        let items = page.slice_of(matching);
        Ok(Paged::from_total(items, page, total))
    }

    async fn search_bodies(&self, needle: &str, limit: usize) -> Result<Vec<Answer>, StoreError> {
        let filter = compile_filter(needle)?;
        let store = self.inner.read().await;
        let mut matching: Vec<Answer> = store
            .answers
            .values()
            .filter(|answer| filter.matches(answer.body()))
            .cloned()
            .collect();
        matching.sort_by(|a, b| compare(AnswerSort::Recent, a, b));
        matching.truncate(limit);
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    //! Sorting and cascade-support behaviour of the adapter.
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::AnswerDraft;

    fn answer_for(question_id: QuestionId, age_minutes: i64) -> Answer {
        Answer::new(AnswerDraft {
            id: AnswerId::random(),
            author_id: UserId::random(),
            question_id,
            body: "An answer body that is clearly long enough.".to_owned(),
            created_at: Utc::now() - Duration::minutes(age_minutes),
        })
        .expect("valid answer")
    }

    #[tokio::test]
    async fn listing_sorts_by_upvotes_when_requested() {
        let store = MemoryStore::new();
        let question_id = QuestionId::random();
        let plain = answer_for(question_id, 2);
        let popular = answer_for(question_id, 1);
        store.insert(&plain).await.expect("insert");
        store.insert(&popular).await.expect("insert");
        store
            .apply_vote(popular.id(), UserId::random(), MembershipChange::AddUpvote)
            .await
            .expect("vote");

        let listed = store
            .list_by_question(question_id, AnswerSort::HighestUpvotes, PageRequest::first())
            .await
            .expect("list");

        assert_eq!(listed.items[0].id(), popular.id());
        assert_eq!(listed.items.len(), 2);
    }

    #[tokio::test]
    async fn delete_by_question_returns_the_removed_ids() {
        let store = MemoryStore::new();
        let question_id = QuestionId::random();
        let first = answer_for(question_id, 1);
        let second = answer_for(question_id, 2);
        let unrelated = answer_for(QuestionId::random(), 3);
        for answer in [&first, &second, &unrelated] {
            store.insert(answer).await.expect("insert");
        }

        let mut removed = store
            .delete_by_question(question_id)
            .await
            .expect("cascade");
        removed.sort();
        let mut expected = vec![first.id(), second.id()];
        expected.sort();

        assert_eq!(removed, expected);
        assert!(
            store
                .find_by_id(unrelated.id())
                .await
                .expect("find")
                .is_some()
        );
    }
}
