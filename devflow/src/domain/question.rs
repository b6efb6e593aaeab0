//! Question aggregate.
//!
//! A question owns its vote sets, its tag and answer back-references, and a
//! view counter. Constructors and the serde boundary enforce the content
//! length rules and the disjointness of the vote sets; membership changes
//! go through [`MembershipChange::apply`] which preserves disjointness.
//!
//! [`MembershipChange::apply`]: crate::domain::vote::MembershipChange::apply

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::vote::Votable;
use crate::domain::{AnswerId, QuestionId, TagId, UserId};

/// Minimum length of a question title, in characters.
pub const TITLE_MIN: usize = 5;
/// Maximum length of a question title, in characters.
pub const TITLE_MAX: usize = 130;
/// Minimum length of a question body, in characters.
pub const BODY_MIN: usize = 20;

/// Validation errors raised by question constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuestionValidationError {
    /// Title shorter than [`TITLE_MIN`] characters once trimmed.
    #[error("question title must be at least {TITLE_MIN} characters")]
    TitleTooShort,
    /// Title longer than [`TITLE_MAX`] characters.
    #[error("question title must be at most {TITLE_MAX} characters")]
    TitleTooLong,
    /// Body shorter than [`BODY_MIN`] characters once trimmed.
    #[error("question body must be at least {BODY_MIN} characters")]
    BodyTooShort,
    /// A user appeared in both vote sets.
    #[error("a user cannot both upvote and downvote the same question")]
    OverlappingVoteSets,
}

fn validate_title(title: &str) -> Result<(), QuestionValidationError> {
    let length = title.trim().chars().count();
    if length < TITLE_MIN {
        return Err(QuestionValidationError::TitleTooShort);
    }
    if length > TITLE_MAX {
        return Err(QuestionValidationError::TitleTooLong);
    }
    Ok(())
}

fn validate_body(body: &str) -> Result<(), QuestionValidationError> {
    if body.trim().chars().count() < BODY_MIN {
        return Err(QuestionValidationError::BodyTooShort);
    }
    Ok(())
}

/// Validated replacement content for an edit operation.
///
/// Edits replace the title and body only; tags, votes, and answers are
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "QuestionEditDto")]
pub struct QuestionEdit {
    title: String,
    body: String,
}

impl QuestionEdit {
    /// Validate and construct replacement content.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, QuestionValidationError> {
        let title = title.into();
        let body = body.into();
        validate_title(&title)?;
        validate_body(&body)?;
        Ok(Self { title, body })
    }

    /// Replacement title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replacement body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionEditDto {
    title: String,
    body: String,
}

impl TryFrom<QuestionEditDto> for QuestionEdit {
    type Error = QuestionValidationError;

    fn try_from(value: QuestionEditDto) -> Result<Self, Self::Error> {
        Self::new(value.title, value.body)
    }
}

/// Unvalidated inputs for a new question.
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    /// Identifier assigned to the question.
    pub id: QuestionId,
    /// The asking user.
    pub author_id: UserId,
    /// Question title.
    pub title: String,
    /// Question body.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A question with its votes, tags, answers, and view counter.
///
/// ## Invariants
/// - `upvoters ∩ downvoters = ∅` at all times.
/// - `author_id` is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "QuestionDto", into = "QuestionDto")]
pub struct Question {
    id: QuestionId,
    author_id: UserId,
    title: String,
    body: String,
    tag_ids: Vec<TagId>,
    answer_ids: Vec<AnswerId>,
    upvoters: BTreeSet<UserId>,
    downvoters: BTreeSet<UserId>,
    views: u64,
    created_at: DateTime<Utc>,
}

impl Question {
    /// Validate a draft and build a fresh question with no votes, tags,
    /// answers, or views.
    pub fn new(draft: QuestionDraft) -> Result<Self, QuestionValidationError> {
        validate_title(&draft.title)?;
        validate_body(&draft.body)?;
        Ok(Self {
            id: draft.id,
            author_id: draft.author_id,
            title: draft.title,
            body: draft.body,
            tag_ids: Vec::new(),
            answer_ids: Vec::new(),
            upvoters: BTreeSet::new(),
            downvoters: BTreeSet::new(),
            views: 0,
            created_at: draft.created_at,
        })
    }

    /// Question identifier.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Question title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Question body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Tags attached to this question.
    pub fn tag_ids(&self) -> &[TagId] {
        &self.tag_ids
    }

    /// Answers posted under this question.
    pub fn answer_ids(&self) -> &[AnswerId] {
        &self.answer_ids
    }

    /// Number of times the question detail was viewed.
    pub fn views(&self) -> u64 {
        self.views
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of current upvotes.
    pub fn upvote_count(&self) -> usize {
        self.upvoters.len()
    }

    pub(crate) fn apply_edit(&mut self, edit: &QuestionEdit) {
        self.title = edit.title.clone();
        self.body = edit.body.clone();
    }

    pub(crate) fn record_tag(&mut self, tag_id: TagId) {
        if !self.tag_ids.contains(&tag_id) {
            self.tag_ids.push(tag_id);
        }
    }

    pub(crate) fn record_answer(&mut self, answer_id: AnswerId) {
        if !self.answer_ids.contains(&answer_id) {
            self.answer_ids.push(answer_id);
        }
    }

    pub(crate) fn remove_answer(&mut self, answer_id: AnswerId) {
        self.answer_ids.retain(|id| *id != answer_id);
    }

    pub(crate) fn increment_views(&mut self) {
        self.views = self.views.saturating_add(1);
    }

    pub(crate) fn vote_sets_mut(&mut self) -> (&mut BTreeSet<UserId>, &mut BTreeSet<UserId>) {
        (&mut self.upvoters, &mut self.downvoters)
    }
}

impl Votable for Question {
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
struct QuestionDto {
    id: QuestionId,
    author_id: UserId,
    title: String,
    body: String,
    tag_ids: Vec<TagId>,
    answer_ids: Vec<AnswerId>,
    upvoters: BTreeSet<UserId>,
    downvoters: BTreeSet<UserId>,
    views: u64,
    created_at: DateTime<Utc>,
}

impl From<Question> for QuestionDto {
    fn from(value: Question) -> Self {
        let Question {
            id,
            author_id,
            title,
            body,
            tag_ids,
            answer_ids,
            upvoters,
            downvoters,
            views,
            created_at,
        } = value;
        Self {
            id,
            author_id,
            title,
            body,
            tag_ids,
            answer_ids,
            upvoters,
            downvoters,
            views,
            created_at,
        }
    }
}

impl TryFrom<QuestionDto> for Question {
    type Error = QuestionValidationError;

    fn try_from(value: QuestionDto) -> Result<Self, Self::Error> {
        validate_title(&value.title)?;
        validate_body(&value.body)?;
        if value.upvoters.intersection(&value.downvoters).next().is_some() {
            return Err(QuestionValidationError::OverlappingVoteSets);
        }
        Ok(Self {
            id: value.id,
            author_id: value.author_id,
            title: value.title,
            body: value.body,
            tag_ids: value.tag_ids,
            answer_ids: value.answer_ids,
            upvoters: value.upvoters,
            downvoters: value.downvoters,
            views: value.views,
            created_at: value.created_at,
        })
    }
}
