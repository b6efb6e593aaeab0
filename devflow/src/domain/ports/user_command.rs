//! Driving port for user lifecycle operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, UserId};

/// Request to register a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    /// Public display name.
    pub display_name: String,
}

/// Outcome of registering a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    /// Id of the new user.
    pub user_id: UserId,
}

/// Driving port for user mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Register a user with zero reputation and an empty collection.
    async fn register(&self, request: RegisterUserRequest)
    -> Result<RegisterUserResponse, Error>;

    /// Delete a user along with every question they authored, cascading
    /// each question the same way a direct deletion would.
    async fn delete(&self, user_id: UserId) -> Result<(), Error>;
}
