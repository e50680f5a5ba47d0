use crate::domain::errors::DomainResult;
use crate::domain::ids::{QuestionId, TagId, UserId};
use crate::domain::pagination::PageRequest;
use crate::domain::post::{CascadePolicy, CascadeReport};
use crate::domain::question::entity::{NewQuestion, Question, QuestionUpdate, QuestionView};
use async_trait::async_trait;

#[async_trait]
pub trait QuestionWriteRepository: Send + Sync {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question>;

    /// Apply the content changes and the tag delta. Tag additions use set
    /// semantics, so repeating an update never duplicates a tag.
    async fn update(&self, update: QuestionUpdate) -> DomainResult<()>;

    /// Remove the question with its answers, comments and votes.
    async fn delete_cascade(
        &self,
        id: QuestionId,
        policy: CascadePolicy,
    ) -> DomainResult<CascadeReport>;
}

#[async_trait]
pub trait QuestionReadRepository: Send + Sync {
    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>>;

    async fn find_view(
        &self,
        id: QuestionId,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<QuestionView>>;

    /// Newest first, with the total number of questions.
    async fn list(&self, page: PageRequest) -> DomainResult<(Vec<QuestionView>, u64)>;

    /// Newest first among questions carrying `tag`, with their total.
    async fn list_by_tag(
        &self,
        tag: TagId,
        page: PageRequest,
    ) -> DomainResult<(Vec<QuestionView>, u64)>;

    async fn list_by_owner(&self, owner: UserId, limit: u32) -> DomainResult<Vec<QuestionView>>;
}
