//! Answer aggregate.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::question::BODY_MIN;
use crate::domain::vote::Votable;
use crate::domain::{AnswerId, QuestionId, UserId};

/// Validation errors raised by answer constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnswerValidationError {
    /// Body shorter than [`BODY_MIN`] characters once trimmed.
    #[error("answer body must be at least {BODY_MIN} characters")]
    BodyTooShort,
    /// A user appeared in both vote sets.
    #[error("a user cannot both upvote and downvote the same answer")]
    OverlappingVoteSets,
}

/// Sort orders for listing the answers under a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerSort {
    /// Most upvoted first.
    HighestUpvotes,
    /// Least upvoted first.
    LowestUpvotes,
    /// Newest first.
    #[default]
    Recent,
    /// Oldest first.
    Old,
}

/// Unvalidated inputs for a new answer.
#[derive(Debug, Clone)]
pub struct AnswerDraft {
    /// Identifier assigned to the answer.
    pub id: AnswerId,
    /// The answering user.
    pub author_id: UserId,
    /// The question being answered.
    pub question_id: QuestionId,
    /// Answer body.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// An answer posted under a question, carrying its own vote sets.
///
/// ## Invariants
/// - `upvoters ∩ downvoters = ∅` at all times.
/// - `author_id` and `question_id` are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "AnswerDto", into = "AnswerDto")]
pub struct Answer {
    id: AnswerId,
    author_id: UserId,
    question_id: QuestionId,
    body: String,
    upvoters: BTreeSet<UserId>,
    downvoters: BTreeSet<UserId>,
    created_at: DateTime<Utc>,
}

impl Answer {
    /// Validate a draft and build a fresh answer with no votes.
    pub fn new(draft: AnswerDraft) -> Result<Self, AnswerValidationError> {
        if draft.body.trim().chars().count() < BODY_MIN {
            return Err(AnswerValidationError::BodyTooShort);
        }
        Ok(Self {
            id: draft.id,
            author_id: draft.author_id,
            question_id: draft.question_id,
            body: draft.body,
            upvoters: BTreeSet::new(),
            downvoters: BTreeSet::new(),
            created_at: draft.created_at,
        })
    }

    /// Answer identifier.
    pub fn id(&self) -> AnswerId {
        self.id
    }

    /// The question this answer belongs to.
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    /// Answer body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of current upvotes.
    pub fn upvote_count(&self) -> usize {
        self.upvoters.len()
    }

    pub(crate) fn vote_sets_mut(&mut self) -> (&mut BTreeSet<UserId>, &mut BTreeSet<UserId>) {
        (&mut self.upvoters, &mut self.downvoters)
    }
}

impl Votable for Answer {
    fn author_id(&self) -> UserId {
        self.author_id
    }

    fn upvoters(&self) -> &BTreeSet<UserId> {
        &self.upvoters
    }

    fn downvoters(&self) -> &BTreeSet<UserId> {
        &self.downvoters
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerDto {
    id: AnswerId,
    author_id: UserId,
    question_id: QuestionId,
    body: String,
    upvoters: BTreeSet<UserId>,
    downvoters: BTreeSet<UserId>,
    created_at: DateTime<Utc>,
}

impl From<Answer> for AnswerDto {
    fn from(value: Answer) -> Self {
        let Answer {
            id,
            author_id,
            question_id,
            body,
            upvoters,
            downvoters,
            created_at,
        } = value;
        Self {
            id,
            author_id,
            question_id,
            body,
            upvoters,
            downvoters,
            created_at,
        }
    }
}

impl TryFrom<AnswerDto> for Answer {
    type Error = AnswerValidationError;

    fn try_from(value: AnswerDto) -> Result<Self, Self::Error> {
        if value.body.trim().chars().count() < BODY_MIN {
            return Err(AnswerValidationError::BodyTooShort);
        }
        if value.upvoters.intersection(&value.downvoters).next().is_some() {
            return Err(AnswerValidationError::OverlappingVoteSets);
        }
        Ok(Self {
            id: value.id,
            author_id: value.author_id,
            question_id: value.question_id,
            body: value.body,
            upvoters: value.upvoters,
            downvoters: value.downvoters,
            created_at: value.created_at,
        })
    }
}
