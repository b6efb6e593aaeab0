//! Vote state transitions and their reputation consequences.
//!
//! Voting on a question or answer is a three-state machine per
//! (voter, item) pair: neutral, upvoted, or downvoted. [`resolve_vote`]
//! maps the current state and the requested action to the membership change
//! for the item's vote sets plus the reputation deltas owed to the item's
//! author and to the voter. The function is pure; services apply the
//! resulting side effects through the repository ports.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Reputation the author gains when their content is upvoted.
pub const UPVOTE_AUTHOR_DELTA: i64 = 10;
/// Reputation the voter gains for casting an upvote.
pub const UPVOTE_VOTER_DELTA: i64 = 1;
/// Reputation the author loses when their content is downvoted.
pub const DOWNVOTE_AUTHOR_DELTA: i64 = 2;
/// Reputation the voter loses for casting a downvote.
pub const DOWNVOTE_VOTER_DELTA: i64 = 1;
/// Flat author-side swing applied when a vote flips direction in one step.
///
/// Product constants, not arithmetic: the swing values are fixed literals
/// and must not be re-derived from the base deltas.
pub const SWING_AUTHOR_DELTA: i64 = 12;
/// Flat voter-side swing applied when a vote flips direction in one step.
pub const SWING_VOTER_DELTA: i64 = 2;

/// The direction a voter requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VoteAction {
    /// Cast (or retract, if already cast) an upvote.
    Upvote,
    /// Cast (or retract, if already cast) a downvote.
    Downvote,
}

/// A voter's current standing on an item, derived from set membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VoteState {
    /// The voter is in neither vote set.
    Neutral,
    /// The voter is in the upvoter set.
    Upvoted,
    /// The voter is in the downvoter set.
    Downvoted,
}

/// The membership operation to apply to an item's vote sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MembershipChange {
    /// Add the voter to the upvoter set.
    AddUpvote,
    /// Remove the voter from the upvoter set (toggle off).
    RemoveUpvote,
    /// Move the voter from the downvoter set to the upvoter set.
    SwitchToUpvote,
    /// Add the voter to the downvoter set.
    AddDownvote,
    /// Remove the voter from the downvoter set (toggle off).
    RemoveDownvote,
    /// Move the voter from the upvoter set to the downvoter set.
    SwitchToDownvote,
}

impl MembershipChange {
    /// Apply this change to an item's vote sets.
    ///
    /// Removal from the opposite set happens before insertion, so the
    /// disjointness of the two sets is preserved for every change.
    pub fn apply(
        self,
        voter: UserId,
        upvoters: &mut BTreeSet<UserId>,
        downvoters: &mut BTreeSet<UserId>,
    ) {
        match self {
            Self::AddUpvote => {
                upvoters.insert(voter);
            }
            Self::RemoveUpvote => {
                upvoters.remove(&voter);
            }
            Self::SwitchToUpvote => {
                downvoters.remove(&voter);
                upvoters.insert(voter);
            }
            Self::AddDownvote => {
                downvoters.insert(voter);
            }
            Self::RemoveDownvote => {
                downvoters.remove(&voter);
            }
            Self::SwitchToDownvote => {
                upvoters.remove(&voter);
                downvoters.insert(voter);
            }
        }
    }
}

/// The full consequence of one vote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    /// Membership operation for the item's vote sets.
    pub membership: MembershipChange,
    /// Reputation delta owed to the item's author.
    pub author_delta: i64,
    /// Reputation delta owed to the voter.
    pub voter_delta: i64,
}

/// Resolve a vote request against the voter's current state.
///
/// # Examples
/// ```
/// use devflow::domain::{MembershipChange, VoteAction, VoteState, resolve_vote};
///
/// let outcome = resolve_vote(VoteState::Downvoted, VoteAction::Upvote);
/// assert_eq!(outcome.membership, MembershipChange::SwitchToUpvote);
/// assert_eq!(outcome.author_delta, 12);
/// ```
#[must_use]
pub const fn resolve_vote(state: VoteState, action: VoteAction) -> VoteOutcome {
    match (action, state) {
        (VoteAction::Upvote, VoteState::Neutral) => VoteOutcome {
            membership: MembershipChange::AddUpvote,
            author_delta: UPVOTE_AUTHOR_DELTA,
            voter_delta: UPVOTE_VOTER_DELTA,
        },
        (VoteAction::Upvote, VoteState::Upvoted) => VoteOutcome {
            membership: MembershipChange::RemoveUpvote,
            author_delta: -UPVOTE_AUTHOR_DELTA,
            voter_delta: -UPVOTE_VOTER_DELTA,
        },
        (VoteAction::Upvote, VoteState::Downvoted) => VoteOutcome {
            membership: MembershipChange::SwitchToUpvote,
            author_delta: SWING_AUTHOR_DELTA,
            voter_delta: SWING_VOTER_DELTA,
        },
        (VoteAction::Downvote, VoteState::Neutral) => VoteOutcome {
            membership: MembershipChange::AddDownvote,
            author_delta: -DOWNVOTE_AUTHOR_DELTA,
            voter_delta: -DOWNVOTE_VOTER_DELTA,
        },
        (VoteAction::Downvote, VoteState::Downvoted) => VoteOutcome {
            membership: MembershipChange::RemoveDownvote,
            author_delta: DOWNVOTE_AUTHOR_DELTA,
            voter_delta: DOWNVOTE_VOTER_DELTA,
        },
        (VoteAction::Downvote, VoteState::Upvoted) => VoteOutcome {
            membership: MembershipChange::SwitchToDownvote,
            author_delta: -SWING_AUTHOR_DELTA,
            voter_delta: -SWING_VOTER_DELTA,
        },
    }
}

/// Content that carries vote sets and an owning author.
///
/// Implemented by questions and answers; lets the vote service derive the
/// authoritative vote state without caring which kind of item it holds.
pub trait Votable {
    /// The user who authored this item.
    fn author_id(&self) -> UserId;

    /// Users who currently upvote this item.
    fn upvoters(&self) -> &BTreeSet<UserId>;

    /// Users who currently downvote this item.
    fn downvoters(&self) -> &BTreeSet<UserId>;

    /// Derive the voter's current state from authoritative membership.
    fn vote_state(&self, voter: UserId) -> VoteState {
        if self.upvoters().contains(&voter) {
            VoteState::Upvoted
        } else if self.downvoters().contains(&voter) {
            VoteState::Downvoted
        } else {
            VoteState::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    //! The resolution table, verified case by case against the product
    //! constants, plus membership invariant coverage.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(VoteState::Neutral, VoteAction::Upvote, MembershipChange::AddUpvote, 10, 1)]
    #[case(VoteState::Upvoted, VoteAction::Upvote, MembershipChange::RemoveUpvote, -10, -1)]
    #[case(VoteState::Downvoted, VoteAction::Upvote, MembershipChange::SwitchToUpvote, 12, 2)]
    #[case(VoteState::Neutral, VoteAction::Downvote, MembershipChange::AddDownvote, -2, -1)]
    #[case(VoteState::Downvoted, VoteAction::Downvote, MembershipChange::RemoveDownvote, 2, 1)]
    #[case(VoteState::Upvoted, VoteAction::Downvote, MembershipChange::SwitchToDownvote, -12, -2)]
    fn resolution_table_matches_product_constants(
        #[case] state: VoteState,
        #[case] action: VoteAction,
        #[case] membership: MembershipChange,
        #[case] author_delta: i64,
        #[case] voter_delta: i64,
    ) {
        let outcome = resolve_vote(state, action);
        assert_eq!(outcome.membership, membership);
        assert_eq!(outcome.author_delta, author_delta);
        assert_eq!(outcome.voter_delta, voter_delta);
    }

    #[rstest]
    fn toggling_twice_restores_membership_and_nets_zero() {
        let voter = UserId::random();
        let mut upvoters = BTreeSet::new();
        let mut downvoters = BTreeSet::new();

        let first = resolve_vote(VoteState::Neutral, VoteAction::Upvote);
        first
            .membership
            .apply(voter, &mut upvoters, &mut downvoters);
        let second = resolve_vote(VoteState::Upvoted, VoteAction::Upvote);
        second
            .membership
            .apply(voter, &mut upvoters, &mut downvoters);

        assert!(upvoters.is_empty());
        assert!(downvoters.is_empty());
        assert_eq!(first.author_delta + second.author_delta, 0);
        assert_eq!(first.voter_delta + second.voter_delta, 0);
    }

    #[rstest]
    #[case(MembershipChange::AddUpvote)]
    #[case(MembershipChange::SwitchToUpvote)]
    #[case(MembershipChange::AddDownvote)]
    #[case(MembershipChange::SwitchToDownvote)]
    fn every_change_preserves_disjoint_vote_sets(#[case] change: MembershipChange) {
        let voter = UserId::random();
        let mut upvoters = BTreeSet::new();
        let mut downvoters = BTreeSet::new();
        // Start from the worst position for the change under test.
        match change {
            MembershipChange::SwitchToUpvote => {
                downvoters.insert(voter);
            }
            MembershipChange::SwitchToDownvote => {
                upvoters.insert(voter);
            }
            _ => {}
        }

        change.apply(voter, &mut upvoters, &mut downvoters);

        assert!(upvoters.intersection(&downvoters).next().is_none());
    }

    #[rstest]
    fn switch_leaves_voter_in_target_set_only() {
        let voter = UserId::random();
        let mut upvoters = BTreeSet::from([voter]);
        let mut downvoters = BTreeSet::new();

        MembershipChange::SwitchToDownvote.apply(voter, &mut upvoters, &mut downvoters);

        assert!(!upvoters.contains(&voter));
        assert!(downvoters.contains(&voter));
    }
}
