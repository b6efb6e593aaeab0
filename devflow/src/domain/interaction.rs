//! Interaction (activity) records.
//!
//! An interaction links a user, an action kind, and the affected items and
//! tags. The records feed the per-user tag affinity ranking and are swept
//! when the content they reference is deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AnswerId, InteractionId, QuestionId, TagId, UserId};

/// The kind of activity an interaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionAction {
    /// The user asked a question.
    Ask,
    /// The user answered a question.
    Answer,
    /// The user viewed a question.
    View,
}

/// An audit record of one user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    id: InteractionId,
    user_id: UserId,
    action: InteractionAction,
    question_id: Option<QuestionId>,
    answer_id: Option<AnswerId>,
    tag_ids: Vec<TagId>,
    created_at: DateTime<Utc>,
}

impl Interaction {
    /// Record that a user asked a question.
    pub fn ask(
        user_id: UserId,
        question_id: QuestionId,
        tag_ids: Vec<TagId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: InteractionId::random(),
            user_id,
            action: InteractionAction::Ask,
            question_id: Some(question_id),
            answer_id: None,
            tag_ids,
            created_at,
        }
    }

    /// Record that a user answered a question.
    pub fn answer(
        user_id: UserId,
        question_id: QuestionId,
        answer_id: AnswerId,
        tag_ids: Vec<TagId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: InteractionId::random(),
            user_id,
            action: InteractionAction::Answer,
            question_id: Some(question_id),
            answer_id: Some(answer_id),
            tag_ids,
            created_at,
        }
    }

    /// Record that a user viewed a question.
    pub fn view(user_id: UserId, question_id: QuestionId, created_at: DateTime<Utc>) -> Self {
        Self {
            id: InteractionId::random(),
            user_id,
            action: InteractionAction::View,
            question_id: Some(question_id),
            answer_id: None,
            tag_ids: Vec::new(),
            created_at,
        }
    }

    /// Record identifier.
    pub fn id(&self) -> InteractionId {
        self.id
    }

    /// The acting user.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// The recorded action kind.
    pub fn action(&self) -> InteractionAction {
        self.action
    }

    /// The question involved, if any.
    pub fn question_id(&self) -> Option<QuestionId> {
        self.question_id
    }

    /// The answer involved, if any.
    pub fn answer_id(&self) -> Option<AnswerId> {
        self.answer_id
    }

    /// Tags of the content involved.
    pub fn tag_ids(&self) -> &[TagId] {
        &self.tag_ids
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn view_records_carry_no_tags() {
        let record = Interaction::view(UserId::random(), QuestionId::random(), Utc::now());
        assert_eq!(record.action(), InteractionAction::View);
        assert!(record.tag_ids().is_empty());
        assert!(record.answer_id().is_none());
    }

    #[rstest]
    fn answer_records_reference_both_items() {
        let record = Interaction::answer(
            UserId::random(),
            QuestionId::random(),
            AnswerId::random(),
            vec![TagId::random()],
            Utc::now(),
        );
        assert!(record.question_id().is_some());
        assert!(record.answer_id().is_some());
    }
}
