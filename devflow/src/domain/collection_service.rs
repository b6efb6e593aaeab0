//! Saved-question collection domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CollectionCommand, QuestionRepository, ToggleSaveRequest, ToggleSaveResponse, UserRepository,
};
use crate::domain::Error;

/// Collection service implementing the toggle-save driving port.
#[derive(Clone)]
pub struct CollectionService<Q, U> {
    questions: Arc<Q>,
    users: Arc<U>,
}

impl<Q, U> CollectionService<Q, U> {
    /// Create a new collection service.
    pub fn new(questions: Arc<Q>, users: Arc<U>) -> Self {
        Self { questions, users }
    }
}

#[async_trait]
impl<Q, U> CollectionCommand for CollectionService<Q, U>
where
    Q: QuestionRepository,
    U: UserRepository,
{
    async fn toggle_save(&self, request: ToggleSaveRequest) -> Result<ToggleSaveResponse, Error> {
        let question_id = request.question_id;
        self.questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("question {question_id} not found")))?;

        let user = self
            .users
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("user {} not found", request.user_id)))?;

        let saved = if user.has_saved(question_id) {
            self.users
                .remove_saved_question(request.user_id, question_id)
                .await?;
            false
        } else {
            self.users
                .add_saved_question(request.user_id, question_id)
                .await?;
            true
        };

        Ok(ToggleSaveResponse { saved })
    }
}
