//! Ports connecting the domain to the outside world.
//!
//! Driving ports (commands and queries) describe the operations callers
//! invoke; driven ports (repositories) describe what the domain needs from
//! storage. Each driven port ships a `Fixture*` implementation for tests
//! that need a harmless stand-in, and a mockall mock for tests that need
//! expectations.

mod answer_command;
mod answer_query;
mod answer_repository;
mod collection_command;
mod interaction_repository;
mod question_command;
mod question_query;
mod question_repository;
mod search_query;
mod store_error;
mod tag_query;
mod tag_repository;
mod user_command;
mod user_repository;
mod vote_command;

pub use answer_command::{AnswerCommand, CreateAnswerRequest, CreateAnswerResponse};
pub use answer_query::{AnswerQuery, ListAnswersRequest};
pub use answer_repository::{AnswerRepository, FixtureAnswerRepository};
pub use collection_command::{CollectionCommand, ToggleSaveRequest, ToggleSaveResponse};
pub use interaction_repository::{FixtureInteractionRepository, InteractionRepository};
pub use question_command::{
    CreateQuestionRequest, CreateQuestionResponse, EditQuestionRequest, QuestionCommand,
};
pub use question_query::{ListQuestionsRequest, QuestionQuery};
pub use question_repository::{FixtureQuestionRepository, QuestionRepository};
pub use search_query::{
    GlobalSearchRequest, SearchKind, SearchLimits, SearchQuery, SearchResult,
};
pub use store_error::StoreError;
pub use tag_query::{ListTagsRequest, QuestionsByTagRequest, QuestionsByTagResponse, TagQuery};
pub use tag_repository::{FixtureTagRepository, TagRepository};
pub use user_command::{RegisterUserRequest, RegisterUserResponse, UserCommand};
pub use user_repository::{FixtureUserRepository, UserRepository};
pub use vote_command::{VoteCommand, VoteReceipt, VoteRequest, VoteTarget};

#[cfg(test)]
pub use answer_command::MockAnswerCommand;
#[cfg(test)]
pub use answer_query::MockAnswerQuery;
#[cfg(test)]
pub use answer_repository::MockAnswerRepository;
#[cfg(test)]
pub use collection_command::MockCollectionCommand;
#[cfg(test)]
pub use interaction_repository::MockInteractionRepository;
#[cfg(test)]
pub use question_command::MockQuestionCommand;
#[cfg(test)]
pub use question_query::MockQuestionQuery;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use search_query::MockSearchQuery;
#[cfg(test)]
pub use tag_query::MockTagQuery;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use user_command::MockUserCommand;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use vote_command::MockVoteCommand;
