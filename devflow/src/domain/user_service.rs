//! User domain service.
//!
//! Registration and account deletion. Deleting an account removes every
//! question the user authored through the ordinary question cascade, then
//! removes the user document itself.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    QuestionCommand, QuestionRepository, RegisterUserRequest, RegisterUserResponse, UserCommand,
    UserRepository,
};
use crate::domain::{DisplayName, Error, User, UserId};

/// User service implementing the user driving port.
#[derive(Clone)]
pub struct UserService<C, Q, U> {
    question_command: Arc<C>,
    questions: Arc<Q>,
    users: Arc<U>,
}

impl<C, Q, U> UserService<C, Q, U> {
    /// Create a new user service. The question command is reused so account
    /// deletion cascades exactly like a direct question deletion.
    pub fn new(question_command: Arc<C>, questions: Arc<Q>, users: Arc<U>) -> Self {
        Self {
            question_command,
            questions,
            users,
        }
    }
}

#[async_trait]
impl<C, Q, U> UserCommand for UserService<C, Q, U>
where
    C: QuestionCommand,
    Q: QuestionRepository,
    U: UserRepository,
{
    async fn register(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, Error> {
        let display_name = DisplayName::new(request.display_name)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let user = User::new(UserId::random(), display_name, Utc::now());
        self.users.insert(&user).await?;
        Ok(RegisterUserResponse { user_id: user.id() })
    }

    async fn delete(&self, user_id: UserId) -> Result<(), Error> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("user {user_id} not found")))?;

        let authored = self.questions.list_by_author(user_id).await?;
        for question_id in &authored {
            self.question_command.delete(*question_id).await?;
        }

        let removed = self.users.delete(user_id).await?;
        if !removed {
            return Err(Error::not_found(format!("user {user_id} not found")));
        }
        tracing::debug!(user = %user_id, questions = authored.len(), "user deleted");
        Ok(())
    }
}
