//! Driving port for answer reads.

use async_trait::async_trait;
use pagination::{PageRequest, Paged};
use serde::{Deserialize, Serialize};

use crate::domain::{Answer, AnswerSort, Error, QuestionId};

/// Request to list the answers under a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAnswersRequest {
    /// The question whose answers to list.
    pub question_id: QuestionId,
    /// Ordering of the result.
    #[serde(default)]
    pub sort: AnswerSort,
    /// Page to return.
    #[serde(default)]
    pub page: PageRequest,
}

/// Driving port for answer reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerQuery: Send + Sync {
    /// List a question's answers in the requested order.
    async fn list_for_question(&self, request: ListAnswersRequest)
    -> Result<Paged<Answer>, Error>;
}
