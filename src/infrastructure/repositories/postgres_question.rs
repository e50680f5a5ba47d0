// src/infrastructure/repositories/postgres_question.rs
use super::map_sqlx;
use super::rows::{QUESTION_VIEW_SELECT, QuestionRow, QuestionViewRow, count, tags_for};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{QuestionId, TagId, UserId};
use crate::domain::pagination::PageRequest;
use crate::domain::post::{CascadePolicy, CascadeReport};
use crate::domain::question::{
    NewQuestion, Question, QuestionReadRepository, QuestionUpdate, QuestionView,
    QuestionWriteRepository,
};
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use std::collections::BTreeSet;

const QUESTION_COLUMNS: &str = "q.id, q.title, q.body, q.owner_id, q.created_at, q.updated_at,
    ARRAY(SELECT qt.tag_id FROM question_tags qt WHERE qt.question_id = q.id) AS tag_ids";

fn raw_ids(ids: &BTreeSet<TagId>) -> Vec<i64> {
    ids.iter().copied().map(i64::from).collect()
}

async fn add_tags(conn: &mut PgConnection, question: i64, tags: &BTreeSet<TagId>) -> DomainResult<()> {
    if tags.is_empty() {
        return Ok(());
    }
    sqlx::query(
        "INSERT INTO question_tags (question_id, tag_id)
         SELECT $1, UNNEST($2::BIGINT[])
         ON CONFLICT DO NOTHING",
    )
    .bind(question)
    .bind(raw_ids(tags))
    .execute(&mut *conn)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

async fn remove_tags(
    conn: &mut PgConnection,
    question: i64,
    tags: &BTreeSet<TagId>,
) -> DomainResult<()> {
    if tags.is_empty() {
        return Ok(());
    }
    sqlx::query("DELETE FROM question_tags WHERE question_id = $1 AND tag_id = ANY($2)")
        .bind(question)
        .bind(raw_ids(tags))
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

async fn load_question(conn: &mut PgConnection, id: i64) -> DomainResult<Option<Question>> {
    let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions q WHERE q.id = $1");
    let row = sqlx::query_as::<_, QuestionRow>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    row.map(Question::try_from).transpose()
}

#[derive(Clone)]
pub struct PostgresQuestionWriteRepository {
    pool: PgPool,
}

impl PostgresQuestionWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionWriteRepository for PostgresQuestionWriteRepository {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question> {
        let NewQuestion {
            title,
            body,
            owner_id,
            tag_ids,
            created_at,
        } = question;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO questions (title, body, owner_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(i64::from(owner_id))
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        add_tags(&mut tx, id, &tag_ids).await?;
        let stored = load_question(&mut tx, id).await?;

        tx.commit().await.map_err(map_sqlx)?;

        stored.ok_or_else(|| DomainError::Persistence(format!("question {id} vanished after insert")))
    }

    async fn update(&self, update: QuestionUpdate) -> DomainResult<()> {
        let QuestionUpdate {
            id,
            title,
            body,
            tags,
            updated_at,
        } = update;
        let raw_id = i64::from(id);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let touched = sqlx::query(
            "UPDATE questions
             SET title = COALESCE($2, title),
                 body = COALESCE($3, body),
                 updated_at = $4
             WHERE id = $1",
        )
        .bind(raw_id)
        .bind(title.map(|t| t.into_inner()))
        .bind(body.map(|b| b.into_inner()))
        .bind(updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if touched.rows_affected() == 0 {
            return Err(DomainError::not_found("question not found"));
        }

        if let Some(delta) = tags {
            remove_tags(&mut tx, raw_id, &delta.to_remove).await?;
            add_tags(&mut tx, raw_id, &delta.to_add).await?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_cascade(
        &self,
        id: QuestionId,
        policy: CascadePolicy,
    ) -> DomainResult<CascadeReport> {
        let raw_id = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM questions WHERE id = $1 FOR UPDATE")
            .bind(raw_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if exists.is_none() {
            return Err(DomainError::not_found("question not found"));
        }

        let answer_ids = sqlx::query_scalar::<_, i64>("SELECT id FROM answers WHERE question_id = $1")
            .bind(raw_id)
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut report = CascadeReport::default();

        report.comments += sqlx::query("DELETE FROM comments WHERE post_kind = 'question' AND post_id = $1")
            .bind(raw_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        report.votes += sqlx::query("DELETE FROM votes WHERE target_kind = 'question' AND target_id = $1")
            .bind(raw_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        if policy == CascadePolicy::Transitive && !answer_ids.is_empty() {
            report.comments += sqlx::query(
                "DELETE FROM comments WHERE post_kind = 'answer' AND post_id = ANY($1)",
            )
            .bind(&answer_ids)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

            report.votes += sqlx::query(
                "DELETE FROM votes WHERE target_kind = 'answer' AND target_id = ANY($1)",
            )
            .bind(&answer_ids)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();
        }

        report.answers = sqlx::query("DELETE FROM answers WHERE question_id = $1")
            .bind(raw_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(raw_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        tracing::debug!(
            answers = report.answers,
            comments = report.comments,
            votes = report.votes,
            "question removed"
        );
        Ok(report)
    }
}

#[derive(Clone)]
pub struct PostgresQuestionReadRepository {
    pool: PgPool,
}

impl PostgresQuestionReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach tags to fetched rows and convert them into views.
    async fn into_views(
        &self,
        rows: Vec<QuestionViewRow>,
        viewer: Option<UserId>,
    ) -> DomainResult<Vec<QuestionView>> {
        let tags = tags_for(&self.pool, &rows).await?;
        rows.into_iter()
            .map(|row| row.into_view(viewer, &tags))
            .collect()
    }
}

#[async_trait]
impl QuestionReadRepository for PostgresQuestionReadRepository {
    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        load_question(&mut conn, i64::from(id)).await
    }

    async fn find_view(
        &self,
        id: QuestionId,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<QuestionView>> {
        let sql = format!("{QUESTION_VIEW_SELECT} WHERE q.id = $2");
        let rows = sqlx::query_as::<_, QuestionViewRow>(&sql)
            .bind(viewer.map(i64::from))
            .bind(i64::from(id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(self.into_views(rows, viewer).await?.into_iter().next())
    }

    async fn list(&self, page: PageRequest) -> DomainResult<(Vec<QuestionView>, u64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let sql = format!(
            "{QUESTION_VIEW_SELECT} ORDER BY q.created_at DESC, q.id DESC LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, QuestionViewRow>(&sql)
            .bind(None::<i64>)
            .bind(i64::from(page.limit))
            .bind(i64::from(page.skip))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((self.into_views(rows, None).await?, count(total)))
    }

    async fn list_by_tag(
        &self,
        tag: TagId,
        page: PageRequest,
    ) -> DomainResult<(Vec<QuestionView>, u64)> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM question_tags WHERE tag_id = $1")
                .bind(i64::from(tag))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        let sql = format!(
            "{QUESTION_VIEW_SELECT}
             WHERE EXISTS (
                 SELECT 1 FROM question_tags f WHERE f.question_id = q.id AND f.tag_id = $2
             )
             ORDER BY q.created_at DESC, q.id DESC LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, QuestionViewRow>(&sql)
            .bind(None::<i64>)
            .bind(i64::from(tag))
            .bind(i64::from(page.limit))
            .bind(i64::from(page.skip))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((self.into_views(rows, None).await?, count(total)))
    }

    async fn list_by_owner(&self, owner: UserId, limit: u32) -> DomainResult<Vec<QuestionView>> {
        let sql = format!(
            "{QUESTION_VIEW_SELECT} WHERE q.owner_id = $2
             ORDER BY q.created_at DESC, q.id DESC LIMIT $3"
        );
        let rows = sqlx::query_as::<_, QuestionViewRow>(&sql)
            .bind(None::<i64>)
            .bind(i64::from(owner))
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.into_views(rows, None).await
    }
}
