//! Tag aggregate and tag-name value type.
//!
//! Tag names are matched case-insensitively: "Rust" and "rust" are the same
//! tag. The stored name keeps the casing of whoever created the tag first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{QuestionId, TagId};

/// Maximum length of a tag name, in characters.
pub const TAG_NAME_MAX: usize = 15;

/// Validation errors raised by [`TagName::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TagValidationError {
    /// Name empty once trimmed.
    #[error("tag name must not be empty")]
    EmptyName,
    /// Name longer than [`TAG_NAME_MAX`] characters.
    #[error("tag name must be at most {TAG_NAME_MAX} characters")]
    NameTooLong,
}

/// Sort orders for listing tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagSort {
    /// Newest first.
    #[default]
    Recent,
    /// Oldest first.
    Old,
    /// Most attached questions first.
    Popular,
    /// Alphabetical by name.
    Name,
}

/// A validated tag name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagName(String);

impl TagName {
    /// Validate and construct a tag name.
    pub fn new(name: impl Into<String>) -> Result<Self, TagValidationError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(TagValidationError::EmptyName);
        }
        if name.chars().count() > TAG_NAME_MAX {
            return Err(TagValidationError::NameTooLong);
        }
        Ok(Self(name))
    }

    /// Whether this name and `other` refer to the same tag.
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for TagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}

impl TryFrom<String> for TagName {
    type Error = TagValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A tag and the questions that carry it.
///
/// ## Invariants
/// - `question_ids` mirrors every question listing this tag; upserts add the
///   question id and question deletion pulls it back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    id: TagId,
    name: TagName,
    question_ids: Vec<QuestionId>,
    created_at: DateTime<Utc>,
}

impl Tag {
    /// Build a new tag with no questions attached.
    pub fn new(id: TagId, name: TagName, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            question_ids: Vec::new(),
            created_at,
        }
    }

    /// Tag identifier.
    pub fn id(&self) -> TagId {
        self.id
    }

    /// Tag name.
    pub fn name(&self) -> &TagName {
        &self.name
    }

    /// Questions carrying this tag.
    pub fn question_ids(&self) -> &[QuestionId] {
        &self.question_ids
    }

    /// Number of questions carrying this tag.
    pub fn question_count(&self) -> usize {
        self.question_ids.len()
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn attach_question(&mut self, question_id: QuestionId) {
        if !self.question_ids.contains(&question_id) {
            self.question_ids.push(question_id);
        }
    }

    pub(crate) fn detach_question(&mut self, question_id: QuestionId) {
        self.question_ids.retain(|id| *id != question_id);
    }
}
