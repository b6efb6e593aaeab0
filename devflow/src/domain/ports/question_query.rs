//! Driving port for question reads.

use async_trait::async_trait;
use pagination::{PageRequest, Paged};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Question, QuestionId};

/// Request to list questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuestionsRequest {
    /// Optional case-insensitive filter over title and body.
    pub search: Option<String>,
    /// Page to return.
    #[serde(default)]
    pub page: PageRequest,
}

/// Driving port for question reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionQuery: Send + Sync {
    /// Fetch a single question.
    async fn get(&self, question_id: QuestionId) -> Result<Question, Error>;

    /// List questions newest first.
    async fn list(&self, request: ListQuestionsRequest) -> Result<Paged<Question>, Error>;

    /// The top questions by upvotes, then views.
    async fn hottest(&self, limit: usize) -> Result<Vec<Question>, Error>;
}
