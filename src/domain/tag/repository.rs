use crate::domain::errors::DomainResult;
use crate::domain::tag::{TagId, entity::Tag, value_objects::TagName};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Existing tags whose name is one of `names`.
    async fn find_by_names(&self, names: &[TagName]) -> DomainResult<Vec<Tag>>;

    /// Create the tag with an empty description, or return the one that
    /// already carries this name.
    async fn insert_or_get(&self, name: &TagName) -> DomainResult<Tag>;

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;

    /// Tags ordered by name, optionally filtered by name prefix, plus the
    /// total count matching the filter.
    async fn list(
        &self,
        limit: u32,
        skip: u32,
        prefix: Option<&str>,
    ) -> DomainResult<(Vec<Tag>, u64)>;

    async fn update_info(&self, id: TagId, info: String) -> DomainResult<Tag>;
}
