//! Driving port for global search across content kinds.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Error;

/// Content kind a search hit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    /// Question titles.
    Question,
    /// Answer bodies. Hits link to the parent question.
    Answer,
    /// User display names.
    User,
    /// Tag names.
    Tag,
}

/// One global search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Kind of the matched content.
    pub kind: SearchKind,
    /// Id to navigate to. Answer hits carry the parent question id.
    pub id: Uuid,
    /// Human-readable label for the hit.
    pub title: String,
}

/// Per-kind result caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Cap per kind when no kind filter is given.
    pub per_kind: usize,
    /// Cap when the request names a single kind.
    pub typed: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            per_kind: 2,
            typed: 8,
        }
    }
}

/// Request for a global search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSearchRequest {
    /// The text to match, case-insensitively.
    pub query: String,
    /// Restrict the search to one kind; `None` fans out to all four.
    pub kind: Option<SearchKind>,
}

/// Driving port for global search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchQuery: Send + Sync {
    /// Run a global search, fanning out across kinds unless one is named.
    async fn search(&self, request: GlobalSearchRequest) -> Result<Vec<SearchResult>, Error>;
}
