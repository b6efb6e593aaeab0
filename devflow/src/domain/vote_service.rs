//! Vote domain service.
//!
//! Implements the vote driving port: derives the voter's current standing
//! from the stored vote sets, resolves the transition, applies the
//! membership change, and then settles reputation with the author and the
//! voter as separate increments. The increments are not transactional with
//! the membership write; a failure between them leaves the earlier writes
//! in place.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AnswerRepository, QuestionRepository, UserRepository, VoteCommand, VoteReceipt, VoteRequest,
    VoteTarget,
};
use crate::domain::{Error, UserId, Votable, VoteAction, VoteOutcome, resolve_vote};

/// Vote service implementing the vote driving port.
#[derive(Clone)]
pub struct VoteService<Q, A, U> {
    questions: Arc<Q>,
    answers: Arc<A>,
    users: Arc<U>,
}

impl<Q, A, U> VoteService<Q, A, U> {
    /// Create a new vote service over the three repositories it settles
    /// votes against.
    pub fn new(questions: Arc<Q>, answers: Arc<A>, users: Arc<U>) -> Self {
        Self {
            questions,
            answers,
            users,
        }
    }
}

impl<Q, A, U> VoteService<Q, A, U>
where
    Q: QuestionRepository,
    A: AnswerRepository,
    U: UserRepository,
{
    async fn cast(&self, request: VoteRequest, action: VoteAction) -> Result<VoteReceipt, Error> {
        let voter = request.voter_id;
        let (author_id, outcome) = match request.target {
            VoteTarget::Question(id) => {
                let question = self
                    .questions
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| Error::not_found(format!("question {id} not found")))?;
                let outcome = resolve_vote(question.vote_state(voter), action);
                let updated = self
                    .questions
                    .apply_vote(id, voter, outcome.membership)
                    .await?;
                if !updated {
                    return Err(Error::not_found(format!("question {id} not found")));
                }
                (question.author_id(), outcome)
            }
            VoteTarget::Answer(id) => {
                let answer = self
                    .answers
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| Error::not_found(format!("answer {id} not found")))?;
                let outcome = resolve_vote(answer.vote_state(voter), action);
                let updated = self
                    .answers
                    .apply_vote(id, voter, outcome.membership)
                    .await?;
                if !updated {
                    return Err(Error::not_found(format!("answer {id} not found")));
                }
                (answer.author_id(), outcome)
            }
        };

        self.settle_reputation(author_id, voter, outcome).await
    }

    async fn settle_reputation(
        &self,
        author_id: UserId,
        voter: UserId,
        outcome: VoteOutcome,
    ) -> Result<VoteReceipt, Error> {
        if author_id == voter {
            tracing::debug!(voter = %voter, "self vote awards no reputation");
            return Ok(VoteReceipt {
                membership: outcome.membership,
                author_delta: 0,
                voter_delta: 0,
                self_vote: true,
            });
        }

        self.apply_increment(author_id, outcome.author_delta).await?;
        self.apply_increment(voter, outcome.voter_delta).await?;

        Ok(VoteReceipt {
            membership: outcome.membership,
            author_delta: outcome.author_delta,
            voter_delta: outcome.voter_delta,
            self_vote: false,
        })
    }

    async fn apply_increment(&self, user_id: UserId, delta: i64) -> Result<(), Error> {
        let updated = self.users.adjust_reputation(user_id, delta).await?;
        if !updated {
            tracing::debug!(user = %user_id, delta, "reputation target missing, increment skipped");
        }
        Ok(())
    }
}

#[async_trait]
impl<Q, A, U> VoteCommand for VoteService<Q, A, U>
where
    Q: QuestionRepository,
    A: AnswerRepository,
    U: UserRepository,
{
    async fn upvote(&self, request: VoteRequest) -> Result<VoteReceipt, Error> {
        self.cast(request, VoteAction::Upvote).await
    }

    async fn downvote(&self, request: VoteRequest) -> Result<VoteReceipt, Error> {
        self.cast(request, VoteAction::Downvote).await
    }
}

#[cfg(test)]
#[path = "vote_service_tests.rs"]
mod vote_service_tests;
