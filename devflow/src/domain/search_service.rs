//! Global search domain service.
//!
//! Fans a query out across question titles, answer bodies, user display
//! names, and tag names. Untyped searches cap each kind at a small number
//! of hits; typed searches allow more of the one kind requested. Answer
//! hits resolve to their parent question so callers always land somewhere
//! navigable.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AnswerRepository, GlobalSearchRequest, QuestionRepository, SearchKind, SearchLimits,
    SearchQuery, SearchResult, TagRepository, UserRepository,
};
use crate::domain::Error;

/// Search service implementing the global search driving port.
#[derive(Clone)]
pub struct SearchService<Q, A, U, T> {
    questions: Arc<Q>,
    answers: Arc<A>,
    users: Arc<U>,
    tags: Arc<T>,
    limits: SearchLimits,
}

impl<Q, A, U, T> SearchService<Q, A, U, T> {
    /// Create a new search service with the default per-kind limits.
    pub fn new(questions: Arc<Q>, answers: Arc<A>, users: Arc<U>, tags: Arc<T>) -> Self {
        Self::with_limits(questions, answers, users, tags, SearchLimits::default())
    }

    /// Create a new search service with explicit per-kind limits.
    pub fn with_limits(
        questions: Arc<Q>,
        answers: Arc<A>,
        users: Arc<U>,
        tags: Arc<T>,
        limits: SearchLimits,
    ) -> Self {
        Self {
            questions,
            answers,
            users,
            tags,
            limits,
        }
    }
}

const ALL_KINDS: [SearchKind; 4] = [
    SearchKind::Question,
    SearchKind::Answer,
    SearchKind::User,
    SearchKind::Tag,
];

impl<Q, A, U, T> SearchService<Q, A, U, T>
where
    Q: QuestionRepository,
    A: AnswerRepository,
    U: UserRepository,
    T: TagRepository,
{
    async fn search_kind(
        &self,
        kind: SearchKind,
        needle: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>, Error> {
        let results = match kind {
            SearchKind::Question => self
                .questions
                .search_titles(needle, limit)
                .await?
                .into_iter()
                .map(|question| SearchResult {
                    kind: SearchKind::Question,
                    id: question.id().into(),
                    title: question.title().to_owned(),
                })
                .collect(),
            SearchKind::Answer => self
                .answers
                .search_bodies(needle, limit)
                .await?
                .into_iter()
                .map(|answer| SearchResult {
                    kind: SearchKind::Answer,
                    id: answer.question_id().into(),
                    title: answer.body().to_owned(),
                })
                .collect(),
            SearchKind::User => self
                .users
                .search_display_names(needle, limit)
                .await?
                .into_iter()
                .map(|user| SearchResult {
                    kind: SearchKind::User,
                    id: user.id().into(),
                    title: user.display_name().to_string(),
                })
                .collect(),
            SearchKind::Tag => self
                .tags
                .search_names(needle, limit)
                .await?
                .into_iter()
                .map(|tag| SearchResult {
                    kind: SearchKind::Tag,
                    id: tag.id().into(),
                    title: tag.name().to_string(),
                })
                .collect(),
        };
        Ok(results)
    }
}

#[async_trait]
impl<Q, A, U, T> SearchQuery for SearchService<Q, A, U, T>
where
    Q: QuestionRepository,
    A: AnswerRepository,
    U: UserRepository,
    T: TagRepository,
{
    async fn search(&self, request: GlobalSearchRequest) -> Result<Vec<SearchResult>, Error> {
        let needle = request.query.trim();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        match request.kind {
            Some(kind) => self.search_kind(kind, needle, self.limits.typed).await,
            None => {
                let mut results = Vec::new();
                for kind in ALL_KINDS {
                    results.extend(
                        self.search_kind(kind, needle, self.limits.per_kind)
                            .await?,
                    );
                }
                Ok(results)
            }
        }
    }
}
