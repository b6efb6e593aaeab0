//! Driving port for a user's saved-question collection.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, QuestionId, UserId};

/// Request to toggle a question in a user's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleSaveRequest {
    /// The user whose collection changes.
    pub user_id: UserId,
    /// The question to save or unsave.
    pub question_id: QuestionId,
}

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleSaveResponse {
    /// Whether the question is saved after the toggle.
    pub saved: bool,
}

/// Driving port for collection operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionCommand: Send + Sync {
    /// Save the question when absent from the collection, remove it when
    /// present.
    async fn toggle_save(&self, request: ToggleSaveRequest) -> Result<ToggleSaveResponse, Error>;
}
