//! In-memory document store adapter.
//!
//! One [`MemoryStore`] implements every driven port over a single
//! `tokio::sync::RwLock`, mirroring a document store: each repository call
//! takes the lock once, so individual operations are atomic while
//! multi-call service flows interleave freely, exactly as they would
//! against a remote store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::ports::StoreError;
use crate::domain::{
    Answer, AnswerId, Interaction, Question, QuestionId, Tag, TagId, TextFilter, User, UserId,
};

mod answers;
mod interactions;
mod questions;
mod tags;
mod users;

#[derive(Debug, Default)]
struct Collections {
    questions: HashMap<QuestionId, Question>,
    answers: HashMap<AnswerId, Answer>,
    users: HashMap<UserId, User>,
    tags: HashMap<TagId, Tag>,
    interactions: Vec<Interaction>,
}

/// Shared in-memory store implementing all repository ports.
///
/// Clones share the same underlying collections.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn compile_filter(needle: &str) -> Result<TextFilter, StoreError> {
    TextFilter::new(needle).map_err(|err| StoreError::query(err.to_string()))
}
