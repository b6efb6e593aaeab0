//! Tag repository backed by the in-memory store.
//!
//! Upserts match existing tags by case-insensitive name, so the store never
//! holds two tags differing only in casing.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use pagination::{PageRequest, Paged};

use crate::domain::ports::{StoreError, TagRepository};
use crate::domain::{QuestionId, Tag, TagId, TagName, TagSort};

use super::{MemoryStore, compile_filter};

fn compare(sort: TagSort, a: &Tag, b: &Tag) -> Ordering {
    let ordering = match sort {
        TagSort::Recent => b.created_at().cmp(&a.created_at()),
        TagSort::Old => a.created_at().cmp(&b.created_at()),
        TagSort::Popular => b.question_count().cmp(&a.question_count()),
        TagSort::Name => a
            .name()
            .as_ref()
            .to_lowercase()
            .cmp(&b.name().as_ref().to_lowercase()),
    };
    ordering.then_with(|| b.id().cmp(&a.id()))
}

#[async_trait]
impl TagRepository for MemoryStore {
    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, StoreError> {
        let store = self.inner.read().await;
        Ok(store.tags.get(&id).cloned())
    }

    async fn find_many(&self, ids: &[TagId]) -> Result<Vec<Tag>, StoreError> {
        let store = self.inner.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| store.tags.get(id).cloned())
            .collect())
    }

    async fn upsert_for_question(
        &self,
        name: &TagName,
        question_id: QuestionId,
    ) -> Result<TagId, StoreError> {
        let mut store = self.inner.write().await;
        let existing = store
            .tags
            .values()
            .find(|tag| tag.name().matches(name.as_ref()))
            .map(Tag::id);

        let tag_id = match existing {
            Some(id) => id,
            None => {
                let tag = Tag::new(TagId::random(), name.clone(), Utc::now());
                let id = tag.id();
                store.tags.insert(id, tag);
                tracing::debug!(tag = %id, name = %name, "tag created");
                id
            }
        };
        if let Some(tag) = store.tags.get_mut(&tag_id) {
            tag.attach_question(question_id);
        }
        Ok(tag_id)
    }

    async fn pull_question(&self, question_id: QuestionId) -> Result<(), StoreError> {
        let mut store = self.inner.write().await;
        for tag in store.tags.values_mut() {
            tag.detach_question(question_id);
        }
        Ok(())
    }

    async fn list<'a>(
        &self,
        search: Option<&'a str>,
        sort: TagSort,
        page: PageRequest,
    ) -> Result<Paged<Tag>, StoreError> {
        let store = self.inner.read().await;
        let mut matching: Vec<Tag> = match search {
            Some(needle) => {
                let filter = compile_filter(needle)?;
                store
                    .tags
                    .values()
                    .filter(|tag| filter.matches(tag.name().as_ref()))
                    .cloned()
                    .collect()
            }
            None => store.tags.values().cloned().collect(),
        };
        matching.sort_by(|a, b| compare(sort, a, b));

        let total = matching.len();
        let items = page.slice_of(matching);
        Ok(Paged::from_total(items, page, total))
    }

    async fn popular(&self, limit: usize) -> Result<Vec<Tag>, StoreError> {
        let store = self.inner.read().await;
        let mut all: Vec<Tag> = store.tags.values().cloned().collect();
        all.sort_by(|a, b| compare(TagSort::Popular, a, b));
        all.truncate(limit);
        Ok(all)
    }

    async fn search_names(&self, needle: &str, limit: usize) -> Result<Vec<Tag>, StoreError> {
        let filter = compile_filter(needle)?;
        let store = self.inner.read().await;
        let mut matching: Vec<Tag> = store
            .tags
            .values()
            .filter(|tag| filter.matches(tag.name().as_ref()))
            .cloned()
            .collect();
        matching.sort_by(|a, b| compare(TagSort::Name, a, b));
        matching.truncate(limit);
        Ok(matching)
    }
}
