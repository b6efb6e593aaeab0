//! User aggregate.
//!
//! Reputation is mutated only as a side effect of voting, authoring, and
//! deletion events; it is unbounded in both directions.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{QuestionId, UserId};

/// Minimum length of a display name, in characters.
pub const DISPLAY_NAME_MIN: usize = 3;
/// Maximum length of a display name, in characters.
pub const DISPLAY_NAME_MAX: usize = 50;

/// Validation errors raised by [`DisplayName::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Display name empty once trimmed.
    #[error("display name must not be empty")]
    EmptyDisplayName,
    /// Display name shorter than [`DISPLAY_NAME_MIN`] characters.
    #[error("display name must be at least {DISPLAY_NAME_MIN} characters")]
    DisplayNameTooShort,
    /// Display name longer than [`DISPLAY_NAME_MAX`] characters.
    #[error("display name must be at most {DISPLAY_NAME_MAX} characters")]
    DisplayNameTooLong,
}

/// Human readable display name for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a display name.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        let length = name.chars().count();
        if length < DISPLAY_NAME_MIN {
            return Err(UserValidationError::DisplayNameTooShort);
        }
        if length > DISPLAY_NAME_MAX {
            return Err(UserValidationError::DisplayNameTooLong);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// An application user with reputation and saved questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    display_name: DisplayName,
    reputation: i64,
    saved_question_ids: BTreeSet<QuestionId>,
    joined_at: DateTime<Utc>,
}

impl User {
    /// Build a new user with zero reputation and an empty saved set.
    pub fn new(id: UserId, display_name: DisplayName, joined_at: DateTime<Utc>) -> Self {
        Self {
            id,
            display_name,
            reputation: 0,
            saved_question_ids: BTreeSet::new(),
            joined_at,
        }
    }

    /// User identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name shown to other users.
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Current reputation; may be negative.
    pub fn reputation(&self) -> i64 {
        self.reputation
    }

    /// Questions the user has saved.
    pub fn saved_question_ids(&self) -> &BTreeSet<QuestionId> {
        &self.saved_question_ids
    }

    /// Whether the user has saved the given question.
    pub fn has_saved(&self, question_id: QuestionId) -> bool {
        self.saved_question_ids.contains(&question_id)
    }

    /// Join timestamp.
    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    pub(crate) fn adjust_reputation(&mut self, delta: i64) {
        self.reputation = self.reputation.saturating_add(delta);
    }

    pub(crate) fn save_question(&mut self, question_id: QuestionId) {
        self.saved_question_ids.insert(question_id);
    }

    pub(crate) fn unsave_question(&mut self, question_id: QuestionId) {
        self.saved_question_ids.remove(&question_id);
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    fn user() -> User {
        User::new(
            UserId::random(),
            DisplayName::new("Ada Lovelace").expect("valid name"),
            Utc::now(),
        )
    }

    #[rstest]
    #[case("ab", UserValidationError::DisplayNameTooShort)]
    #[case("  ", UserValidationError::EmptyDisplayName)]
    fn display_name_bounds_are_enforced(
        #[case] name: &str,
        #[case] expected: UserValidationError,
    ) {
        assert_eq!(DisplayName::new(name), Err(expected));
    }

    #[rstest]
    fn reputation_may_go_negative() {
        let mut user = user();
        user.adjust_reputation(-12);
        assert_eq!(user.reputation(), -12);
    }

    #[rstest]
    fn saving_is_idempotent_per_toggle() {
        let mut user = user();
        let question = QuestionId::random();

        user.save_question(question);
        user.save_question(question);
        assert!(user.has_saved(question));
        assert_eq!(user.saved_question_ids().len(), 1);

        user.unsave_question(question);
        assert!(!user.has_saved(question));
    }
}
