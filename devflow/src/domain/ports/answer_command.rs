//! Driving port for answer lifecycle operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{AnswerId, Error, QuestionId, UserId};

/// Request to post an answer under a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAnswerRequest {
    /// The answering user.
    pub author_id: UserId,
    /// The question being answered.
    pub question_id: QuestionId,
    /// Answer body (markdown).
    pub body: String,
}

/// Outcome of posting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAnswerResponse {
    /// Id of the new answer.
    pub answer_id: AnswerId,
}

/// Driving port for answer mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerCommand: Send + Sync {
    /// Post an answer, link it to its question, and credit the author
    /// unless they authored the question.
    async fn create(&self, request: CreateAnswerRequest) -> Result<CreateAnswerResponse, Error>;

    /// Delete an answer, unlink it from its question, sweep its
    /// interaction records, and debit the author.
    async fn delete(&self, answer_id: AnswerId) -> Result<(), Error>;
}
