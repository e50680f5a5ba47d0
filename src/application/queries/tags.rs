// src/application/queries/tags.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{TagDto, TagListDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        pagination::PageRequest,
        tag::{TagId, TagRepository},
    },
};

pub struct ListTagsQuery {
    pub page: PageRequest,
    /// Name prefix filter; blank means no filter.
    pub prefix: Option<String>,
}

pub struct TagQueryService {
    tag_repo: Arc<dyn TagRepository>,
}

impl TagQueryService {
    pub fn new(tag_repo: Arc<dyn TagRepository>) -> Self {
        Self { tag_repo }
    }

    pub async fn list_tags(&self, query: ListTagsQuery) -> ApplicationResult<TagListDto> {
        let prefix = query
            .prefix
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());
        let (tags, total) = self
            .tag_repo
            .list(query.page.limit, query.page.skip, prefix)
            .await?;
        Ok(TagListDto {
            tags_count: total,
            tags: tags.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn get_tag(&self, id: i64) -> ApplicationResult<TagDto> {
        let id = TagId::new(id)?;
        self.tag_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("tag not found"))
    }
}
