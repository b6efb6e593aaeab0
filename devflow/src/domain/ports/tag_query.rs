//! Driving port for tag reads.

use async_trait::async_trait;
use pagination::{PageRequest, Paged};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Question, Tag, TagId, TagSort, UserId};

/// Request to list tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTagsRequest {
    /// Optional case-insensitive filter over tag names.
    pub search: Option<String>,
    /// Ordering of the result.
    #[serde(default)]
    pub sort: TagSort,
    /// Page to return.
    #[serde(default)]
    pub page: PageRequest,
}

/// Request for the questions carrying a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsByTagRequest {
    /// The tag to expand.
    pub tag_id: TagId,
    /// Optional case-insensitive filter over question titles.
    pub search: Option<String>,
    /// Page to return.
    #[serde(default)]
    pub page: PageRequest,
}

/// A tag's name together with a page of its questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsByTagResponse {
    /// Display name of the tag.
    pub tag_name: String,
    /// The matching questions, newest first.
    pub questions: Paged<Question>,
}

/// Driving port for tag reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagQuery: Send + Sync {
    /// List tags in the requested order.
    async fn list(&self, request: ListTagsRequest) -> Result<Paged<Tag>, Error>;

    /// The top tags by attached question count.
    async fn popular(&self, limit: usize) -> Result<Vec<Tag>, Error>;

    /// A tag's name and a page of the questions carrying it.
    async fn questions_by_tag(
        &self,
        request: QuestionsByTagRequest,
    ) -> Result<QuestionsByTagResponse, Error>;

    /// The tags a user has interacted with most, with interaction counts.
    async fn top_for_user(&self, user_id: UserId, limit: usize)
    -> Result<Vec<(Tag, u64)>, Error>;
}
