// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use super::rows::{kind_str, post_ref};
use crate::domain::comment::{Comment, CommentBody, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::UserId;
use crate::domain::post::PostRef;
use crate::domain::user::{Reputation, UserSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_SELECT: &str = "
    SELECT c.id, c.post_kind, c.post_id, c.owner_id, c.body, c.created_at,
           u.username AS owner_username, u.reputation AS owner_reputation
    FROM comments c
    JOIN users u ON u.id = c.owner_id";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_kind: String,
    post_id: i64,
    owner_id: i64,
    body: String,
    created_at: DateTime<Utc>,
    owner_username: String,
    owner_reputation: i64,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            post: post_ref(&row.post_kind, row.post_id)?,
            owner: UserSummary {
                id: UserId::new(row.owner_id)?,
                username: row.owner_username,
                reputation: Reputation(row.owner_reputation),
            },
            body: CommentBody::new(row.body)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            post,
            owner_id,
            body,
            created_at,
        } = comment;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO comments (post_kind, post_id, owner_id, body, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(kind_str(post))
        .bind(post.raw_id())
        .bind(i64::from(owner_id))
        .bind(body.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let sql = format!("{COMMENT_SELECT} WHERE c.id = $1");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn list_for_post(&self, post: PostRef) -> DomainResult<Vec<Comment>> {
        let sql = format!(
            "{COMMENT_SELECT} WHERE c.post_kind = $1 AND c.post_id = $2
             ORDER BY c.created_at ASC, c.id ASC"
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(kind_str(post))
            .bind(post.raw_id())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
