// src/application/commands/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        answer::AnswerReadRepository,
        comment::{CommentBody, CommentRepository, NewComment},
        post::{PostKind, PostRef},
        question::QuestionReadRepository,
    },
};

pub struct CreateCommentCommand {
    pub kind: PostKind,
    pub post_id: i64,
    pub content: String,
}

pub struct CommentCommandService {
    comment_repo: Arc<dyn CommentRepository>,
    question_repo: Arc<dyn QuestionReadRepository>,
    answer_repo: Arc<dyn AnswerReadRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        question_repo: Arc<dyn QuestionReadRepository>,
        answer_repo: Arc<dyn AnswerReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            question_repo,
            answer_repo,
            clock,
        }
    }

    #[tracing::instrument(skip_all, fields(actor = %actor.id))]
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let post = PostRef::from_parts(command.kind, command.post_id)?;
        let body = CommentBody::new(command.content)?;

        let exists = match post {
            PostRef::Question(id) => self.question_repo.find_by_id(id).await?.is_some(),
            PostRef::Answer(id) => self.answer_repo.find_by_id(id).await?.is_some(),
        };
        if !exists {
            return Err(ApplicationError::not_found(format!("{} not found", post.kind())));
        }

        let comment = self
            .comment_repo
            .insert(NewComment {
                post,
                owner_id: actor.id,
                body,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(comment.into())
    }
}
