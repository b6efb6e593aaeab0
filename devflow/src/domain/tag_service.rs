//! Tag domain service.
//!
//! The read side of tags: listings, popularity, the questions carrying a
//! tag, and the per-user affinity ranking derived from interaction records.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Paged;

use crate::domain::ports::{
    InteractionRepository, ListTagsRequest, QuestionRepository, QuestionsByTagRequest,
    QuestionsByTagResponse, TagQuery, TagRepository,
};
use crate::domain::{Error, Question, Tag, TextFilter, UserId};

/// Tag service implementing the tag query driving port.
#[derive(Clone)]
pub struct TagService<Q, T, I> {
    questions: Arc<Q>,
    tags: Arc<T>,
    interactions: Arc<I>,
}

impl<Q, T, I> TagService<Q, T, I> {
    /// Create a new tag service.
    pub fn new(questions: Arc<Q>, tags: Arc<T>, interactions: Arc<I>) -> Self {
        Self {
            questions,
            tags,
            interactions,
        }
    }
}

fn newest_first(questions: &mut [Question]) {
    questions.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
}

#[async_trait]
impl<Q, T, I> TagQuery for TagService<Q, T, I>
where
    Q: QuestionRepository,
    T: TagRepository,
    I: InteractionRepository,
{
    async fn list(&self, request: ListTagsRequest) -> Result<Paged<Tag>, Error> {
        self.tags
            .list(request.search.as_deref(), request.sort, request.page)
            .await
            .map_err(Into::into)
    }

    async fn popular(&self, limit: usize) -> Result<Vec<Tag>, Error> {
        self.tags.popular(limit).await.map_err(Into::into)
    }

    async fn questions_by_tag(
        &self,
        request: QuestionsByTagRequest,
    ) -> Result<QuestionsByTagResponse, Error> {
        let tag = self
            .tags
            .find_by_id(request.tag_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("tag {} not found", request.tag_id)))?;

        let mut questions = self.questions.find_many(tag.question_ids()).await?;
        if let Some(needle) = request.search.as_deref() {
            let filter = TextFilter::new(needle)
                .map_err(|err| Error::invalid_request(err.to_string()))?;
            questions.retain(|question| filter.matches(question.title()));
        }
        newest_first(&mut questions);

        let total = questions.len();
        let items = request.page.slice_of(questions);
        Ok(QuestionsByTagResponse {
            tag_name: tag.name().to_string(),
            questions: Paged::from_total(items, request.page, total),
        })
    }

    async fn top_for_user(
        &self,
        user_id: UserId,
        limit: usize,
    ) -> Result<Vec<(Tag, u64)>, Error> {
        let ranked = self.interactions.top_tags_for_user(user_id, limit).await?;
        let ids: Vec<_> = ranked.iter().map(|(id, _)| *id).collect();
        let tags = self.tags.find_many(&ids).await?;

        // Preserve the interaction-count ranking; drop ids whose tag has
        // since been deleted.
        let resolved = ranked
            .into_iter()
            .filter_map(|(id, count)| {
                tags.iter()
                    .find(|tag| tag.id() == id)
                    .cloned()
                    .map(|tag| (tag, count))
            })
            .collect();
        Ok(resolved)
    }
}
