//! Question repository backed by the in-memory store.

use async_trait::async_trait;
use pagination::{PageRequest, Paged};

use crate::domain::ports::{QuestionRepository, StoreError};
use crate::domain::{
    AnswerId, MembershipChange, Question, QuestionEdit, QuestionId, TagId, UserId, Votable,
};

use super::{MemoryStore, compile_filter};

fn newest_first(questions: &mut [Question]) {
    questions.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
}

#[async_trait]
impl QuestionRepository for MemoryStore {
    async fn insert(&self, question: &Question) -> Result<(), StoreError> {
        let mut store = self.inner.write().await;
        store.questions.insert(question.id(), question.clone());
        tracing::debug!(question = %question.id(), "question inserted");
        Ok(())
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        let store = self.inner.read().await;
        Ok(store.questions.get(&id).cloned())
    }

    async fn find_many(&self, ids: &[QuestionId]) -> Result<Vec<Question>, StoreError> {
        let store = self.inner.read().await;
        let mut found: Vec<Question> = ids
            .iter()
            .filter_map(|id| store.questions.get(id).cloned())
            .collect();
        newest_first(&mut found);
        Ok(found)
    }

    async fn update_content(
        &self,
        id: QuestionId,
        edit: &QuestionEdit,
    ) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        match store.questions.get_mut(&id) {
            Some(question) => {
                question.apply_edit(edit);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn apply_vote(
        &self,
        id: QuestionId,
        voter: UserId,
        change: MembershipChange,
    ) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        match store.questions.get_mut(&id) {
            Some(question) => {
                let (upvoters, downvoters) = question.vote_sets_mut();
                change.apply(voter, upvoters, downvoters);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn add_tag(&self, id: QuestionId, tag_id: TagId) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        match store.questions.get_mut(&id) {
            Some(question) => {
                question.record_tag(tag_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn push_answer(&self, id: QuestionId, answer_id: AnswerId) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        match store.questions.get_mut(&id) {
            Some(question) => {
                question.record_answer(answer_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn pull_answer(&self, id: QuestionId, answer_id: AnswerId) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        match store.questions.get_mut(&id) {
            Some(question) => {
                question.remove_answer(answer_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn increment_views(&self, id: QuestionId) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        match store.questions.get_mut(&id) {
            Some(question) => {
                question.increment_views();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, StoreError> {
        let mut store = self.inner.write().await;
        Ok(store.questions.remove(&id).is_some())
    }

    async fn list_by_author(&self, author_id: UserId) -> Result<Vec<QuestionId>, StoreError> {
        let store = self.inner.read().await;
        Ok(store
            .questions
            .values()
            .filter(|question| question.author_id() == author_id)
            .map(Question::id)
            .collect())
    }

    async fn list<'a>(
        &self,
        search: Option<&'a str>,
        page: PageRequest,
    ) -> Result<Paged<Question>, StoreError> {
        let store = self.inner.read().await;
        let mut matching: Vec<Question> = match search {
            Some(needle) => {
                let filter = compile_filter(needle)?;
                store
                    .questions
                    .values()
                    .filter(|q| filter.matches(q.title()) || filter.matches(q.body()))
                    .cloned()
                    .collect()
            }
            None => store.questions.values().cloned().collect(),
        };
        newest_first(&mut matching);

        let total = matching.len();
        let items = page.slice_of(matching);
        Ok(Paged::from_total(items, page, total))
    }

    async fn hottest(&self, limit: usize) -> Result<Vec<Question>, StoreError> {
        let store = self.inner.read().await;
        let mut all: Vec<Question> = store.questions.values().cloned().collect();
        all.sort_by(|a, b| {
            b.upvote_count()
                .cmp(&a.upvote_count())
                .then_with(|| b.views().cmp(&a.views()))
                .then_with(|| b.id().cmp(&a.id()))
        });
        all.truncate(limit);
        Ok(all)
    }

    async fn search_titles(
        &self,
        needle: &str,
        limit: usize,
    ) -> Result<Vec<Question>, StoreError> {
        let filter = compile_filter(needle)?;
        let store = self.inner.read().await;
        let mut matching: Vec<Question> = store
            .questions
            .values()
            .filter(|q| filter.matches(q.title()))
            .cloned()
            .collect();
        newest_first(&mut matching);
        matching.truncate(limit);
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    //! Listing, search, and vote-write behaviour of the adapter.
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::{QuestionDraft, VoteState};

    fn question_titled(title: &str, age_minutes: i64) -> Question {
        Question::new(QuestionDraft {
            id: QuestionId::random(),
            author_id: UserId::random(),
            title: title.to_owned(),
            body: "A body that is definitely long enough.".to_owned(),
            created_at: Utc::now() - Duration::minutes(age_minutes),
        })
        .expect("valid question")
    }

    #[tokio::test]
    async fn list_returns_newest_first_with_pagination() {
        let store = MemoryStore::new();
        for age in [30, 20, 10] {
            store
                .insert(&question_titled("Paginated question", age))
                .await
                .expect("insert");
        }

        let page = PageRequest::new(1, 2).expect("valid page");
        let listed = store.list(None, page).await.expect("list");

        assert_eq!(listed.items.len(), 2);
        assert!(listed.has_next);
        assert!(listed.items[0].created_at() > listed.items[1].created_at());

        let rest = store
            .list(None, PageRequest::new(2, 2).expect("valid page"))
            .await
            .expect("list");
        assert_eq!(rest.items.len(), 1);
        assert!(!rest.has_next);
    }

    #[tokio::test]
    async fn search_matches_title_and_body_case_insensitively() {
        let store = MemoryStore::new();
        store
            .insert(&question_titled("Lifetime puzzles", 1))
            .await
            .expect("insert");
        store
            .insert(&question_titled("Unrelated", 2))
            .await
            .expect("insert");

        let hits = store
            .list(Some("LIFETIME"), PageRequest::first())
            .await
            .expect("list");
        assert_eq!(hits.items.len(), 1);

        // Body text matches too.
        let hits = store
            .list(Some("definitely long"), PageRequest::first())
            .await
            .expect("list");
        assert_eq!(hits.items.len(), 2);
    }

    #[tokio::test]
    async fn apply_vote_mutates_the_stored_sets() {
        let store = MemoryStore::new();
        let question = question_titled("Votable question", 1);
        let id = question.id();
        let voter = UserId::random();
        store.insert(&question).await.expect("insert");

        let updated = store
            .apply_vote(id, voter, MembershipChange::AddUpvote)
            .await
            .expect("vote");
        assert!(updated);

        let stored = store.find_by_id(id).await.expect("find").expect("present");
        assert_eq!(stored.vote_state(voter), VoteState::Upvoted);

        let missing = store
            .apply_vote(QuestionId::random(), voter, MembershipChange::AddUpvote)
            .await
            .expect("vote");
        assert!(!missing);
    }

    #[tokio::test]
    async fn hottest_ranks_by_upvotes_then_views() {
        let store = MemoryStore::new();
        let quiet = question_titled("Quiet question", 3);
        let viewed = question_titled("Viewed question", 2);
        let upvoted = question_titled("Upvoted question", 1);
        for question in [&quiet, &viewed, &upvoted] {
            store.insert(question).await.expect("insert");
        }
        store
            .apply_vote(upvoted.id(), UserId::random(), MembershipChange::AddUpvote)
            .await
            .expect("vote");
        store
            .increment_views(viewed.id())
            .await
            .expect("view");

        let hottest = store.hottest(2).await.expect("hottest");
        assert_eq!(hottest[0].id(), upvoted.id());
        assert_eq!(hottest[1].id(), viewed.id());
    }
}
