//! Port for tag persistence.
//!
//! Tags are addressed by case-insensitive name on the write path (upsert)
//! and by id everywhere else. The upsert keeps the tag-to-question mirror
//! consistent with the question's own tag list.

use async_trait::async_trait;
use pagination::{PageRequest, Paged};

use crate::domain::{QuestionId, Tag, TagId, TagName, TagSort};

use super::StoreError;

/// Port for tag storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Fetch a tag by id.
    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, StoreError>;

    /// Fetch the tags whose ids appear in `ids`.
    async fn find_many(&self, ids: &[TagId]) -> Result<Vec<Tag>, StoreError>;

    /// Find the tag matching `name` case-insensitively, creating it when
    /// missing, and attach the question id to it. Returns the tag id.
    async fn upsert_for_question(
        &self,
        name: &TagName,
        question_id: QuestionId,
    ) -> Result<TagId, StoreError>;

    /// Pull a question id out of every tag that lists it.
    async fn pull_question(&self, question_id: QuestionId) -> Result<(), StoreError>;

    /// List tags in the requested order, optionally filtered by a
    /// case-insensitive name match.
    async fn list<'a>(
        &self,
        search: Option<&'a str>,
        sort: TagSort,
        page: PageRequest,
    ) -> Result<Paged<Tag>, StoreError>;

    /// The top tags ranked by attached question count, descending.
    async fn popular(&self, limit: usize) -> Result<Vec<Tag>, StoreError>;

    /// Tags whose name matches the needle, for global search.
    async fn search_names(&self, needle: &str, limit: usize) -> Result<Vec<Tag>, StoreError>;
}

/// Fixture implementation holding no tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTagRepository;

#[async_trait]
impl TagRepository for FixtureTagRepository {
    async fn find_by_id(&self, _id: TagId) -> Result<Option<Tag>, StoreError> {
        Ok(None)
    }

    async fn find_many(&self, _ids: &[TagId]) -> Result<Vec<Tag>, StoreError> {
        Ok(Vec::new())
    }

    async fn upsert_for_question(
        &self,
        _name: &TagName,
        _question_id: QuestionId,
    ) -> Result<TagId, StoreError> {
        Ok(TagId::random())
    }

    async fn pull_question(&self, _question_id: QuestionId) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list<'a>(
        &self,
        _search: Option<&'a str>,
        _sort: TagSort,
        _page: PageRequest,
    ) -> Result<Paged<Tag>, StoreError> {
        Ok(Paged::empty())
    }

    async fn popular(&self, _limit: usize) -> Result<Vec<Tag>, StoreError> {
        Ok(Vec::new())
    }

    async fn search_names(&self, _needle: &str, _limit: usize) -> Result<Vec<Tag>, StoreError> {
        Ok(Vec::new())
    }
}
