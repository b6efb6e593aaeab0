//! Core domain model for the question-and-answer engine.
//!
//! Aggregates own their invariants, the vote resolver is a pure function,
//! and services orchestrate the repository ports. Nothing in this tree
//! knows about transports or concrete storage.

mod answer;
mod answer_service;
mod collection_service;
mod error;
mod ids;
mod interaction;
pub mod ports;
mod question;
mod question_service;
mod reputation;
mod search_service;
mod tag;
mod tag_service;
mod text_filter;
mod user;
mod user_service;
mod vote;
mod vote_service;

pub use answer::{Answer, AnswerDraft, AnswerSort, AnswerValidationError};
pub use answer_service::AnswerService;
pub use collection_service::CollectionService;
pub use error::{Error, ErrorCode, ErrorValidationError};
pub use ids::{AnswerId, IdParseError, InteractionId, QuestionId, TagId, UserId};
pub use interaction::{Interaction, InteractionAction};
pub use question::{
    BODY_MIN, Question, QuestionDraft, QuestionEdit, QuestionValidationError, TITLE_MAX,
    TITLE_MIN,
};
pub use question_service::QuestionService;
pub use reputation::ReputationEvent;
pub use search_service::SearchService;
pub use tag::{TAG_NAME_MAX, Tag, TagName, TagSort, TagValidationError};
pub use tag_service::TagService;
pub use text_filter::{TextFilter, TextFilterError};
pub use user::{
    DISPLAY_NAME_MAX, DISPLAY_NAME_MIN, DisplayName, User, UserValidationError,
};
pub use user_service::UserService;
pub use vote::{
    DOWNVOTE_AUTHOR_DELTA, DOWNVOTE_VOTER_DELTA, MembershipChange, SWING_AUTHOR_DELTA,
    SWING_VOTER_DELTA, UPVOTE_AUTHOR_DELTA, UPVOTE_VOTER_DELTA, Votable, VoteAction,
    VoteOutcome, VoteState, resolve_vote,
};
pub use vote_service::VoteService;
