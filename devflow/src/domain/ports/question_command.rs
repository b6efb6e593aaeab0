//! Driving port for question lifecycle operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, QuestionId, TagId, UserId};

/// Request to ask a new question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    /// The asking user.
    pub author_id: UserId,
    /// Question title.
    pub title: String,
    /// Question body (markdown).
    pub body: String,
    /// Raw tag names; matched case-insensitively against existing tags.
    pub tags: Vec<String>,
}

/// Outcome of asking a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQuestionResponse {
    /// Id of the new question.
    pub question_id: QuestionId,
    /// Ids of the tags attached to it, in request order.
    pub tag_ids: Vec<TagId>,
}

/// Request to edit a question's title and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditQuestionRequest {
    /// The question to edit.
    pub question_id: QuestionId,
    /// Replacement title.
    pub title: String,
    /// Replacement body.
    pub body: String,
}

/// Driving port for question mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionCommand: Send + Sync {
    /// Create a question, upsert its tags, and credit the author.
    async fn create(&self, request: CreateQuestionRequest)
    -> Result<CreateQuestionResponse, Error>;

    /// Replace a question's title and body.
    async fn edit(&self, request: EditQuestionRequest) -> Result<(), Error>;

    /// Delete a question and cascade over its answers, interaction
    /// records, and tag references, then debit the author.
    async fn delete(&self, question_id: QuestionId) -> Result<(), Error>;

    /// Record a view of the question, deduplicating per viewer.
    async fn record_view(
        &self,
        question_id: QuestionId,
        viewer_id: Option<UserId>,
    ) -> Result<(), Error>;
}
