// src/application/queries/comments.rs
use std::sync::Arc;

use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::{
        comment::CommentRepository,
        post::{PostKind, PostRef},
    },
};

pub struct CommentQueryService {
    comment_repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repo }
    }

    pub async fn list_comments(
        &self,
        kind: PostKind,
        post_id: i64,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let post = PostRef::from_parts(kind, post_id)?;
        let comments = self.comment_repo.list_for_post(post).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
