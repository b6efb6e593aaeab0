//! Driving port for casting votes on questions and answers.
//!
//! The caller supplies only the target and the voter; the engine derives
//! the voter's current standing from the stored vote sets, never from
//! caller-asserted flags.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{AnswerId, Error, MembershipChange, QuestionId, UserId};

/// The votable item a request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum VoteTarget {
    /// A question document.
    Question(QuestionId),
    /// An answer document.
    Answer(AnswerId),
}

/// Request to cast or toggle a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    /// The item being voted on.
    pub target: VoteTarget,
    /// The user casting the vote.
    pub voter_id: UserId,
}

/// Outcome of a processed vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    /// How the voter's set membership changed.
    pub membership: MembershipChange,
    /// Reputation delta applied to the item's author.
    pub author_delta: i64,
    /// Reputation delta applied to the voter.
    pub voter_delta: i64,
    /// Whether the voter is the item's author. Self-votes update the vote
    /// sets but award no reputation.
    pub self_vote: bool,
}

/// Driving port for the vote operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoteCommand: Send + Sync {
    /// Cast, retract, or swing to an upvote.
    async fn upvote(&self, request: VoteRequest) -> Result<VoteReceipt, Error>;

    /// Cast, retract, or swing to a downvote.
    async fn downvote(&self, request: VoteRequest) -> Result<VoteReceipt, Error>;
}
