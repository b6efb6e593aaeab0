//! Strongly typed entity identifiers.
//!
//! Every aggregate gets its own UUID newtype so a question id can never be
//! passed where an answer id is expected. Identifiers serialise as their
//! canonical string form.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error returned when parsing an identifier from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("identifier must be a valid UUID")]
pub struct IdParseError;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub const fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            /// Access the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an identifier from its canonical string form.
            pub fn parse(value: impl AsRef<str>) -> Result<Self, IdParseError> {
                Uuid::parse_str(value.as_ref())
                    .map(Self)
                    .map_err(|_| IdParseError)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

entity_id! {
    /// Identifier of a question.
    QuestionId
}

entity_id! {
    /// Identifier of an answer.
    AnswerId
}

entity_id! {
    /// Identifier of a tag.
    TagId
}

entity_id! {
    /// Identifier of a user.
    UserId
}

entity_id! {
    /// Identifier of an interaction record.
    InteractionId
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn parse_round_trips_through_display() {
        let id = QuestionId::random();
        let parsed = QuestionId::parse(id.to_string()).expect("round trip");
        assert_eq!(parsed, id);
    }

    #[rstest]
    fn parse_rejects_garbage() {
        assert_eq!(UserId::parse("not-a-uuid"), Err(IdParseError));
    }

    #[rstest]
    fn serde_uses_canonical_strings() {
        let id = TagId::random();
        let value = serde_json::to_value(id).expect("serialise id");
        assert_eq!(value, serde_json::Value::String(id.to_string()));
    }
}
