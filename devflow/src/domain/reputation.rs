//! Fixed reputation deltas for content lifecycle events.
//!
//! Voting deltas live in [`crate::domain::vote`]; this module covers the
//! authoring and deletion bonuses that compose with them. Reputation has no
//! cap or floor, so negative totals are permitted.

/// A lifecycle event that moves an author's reputation by a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReputationEvent {
    /// The author posted a question.
    QuestionAuthored,
    /// One of the author's questions was deleted.
    QuestionDeleted,
    /// The author posted an answer on someone else's question.
    AnswerAuthored,
    /// One of the author's answers on someone else's question was deleted.
    AnswerDeleted,
}

impl ReputationEvent {
    /// The signed reputation delta for this event.
    #[must_use]
    pub const fn delta(self) -> i64 {
        match self {
            Self::QuestionAuthored => 5,
            Self::QuestionDeleted => -5,
            Self::AnswerAuthored => 10,
            Self::AnswerDeleted => -10,
        }
    }
}
