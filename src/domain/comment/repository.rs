use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::errors::DomainResult;
use crate::domain::post::PostRef;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Comments on `post`, oldest first.
    async fn list_for_post(&self, post: PostRef) -> DomainResult<Vec<Comment>>;
}
