// src/infrastructure/repositories/postgres_answer.rs
use super::map_sqlx;
use super::rows::{ANSWER_VIEW_SELECT, AnswerRow, AnswerViewRow, count};
use crate::domain::answer::{
    AcceptancePlan, AcceptancePolicy, Answer, AnswerBody, AnswerId, AnswerReadRepository, AnswerView,
    AnswerWriteRepository, NewAnswer,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{QuestionId, UserId};
use crate::domain::pagination::PageRequest;
use crate::domain::post::CascadeReport;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

const ANSWER_COLUMNS: &str =
    "id, question_id, owner_id, body, accepted, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresAnswerWriteRepository {
    pool: PgPool,
}

impl PostgresAnswerWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerWriteRepository for PostgresAnswerWriteRepository {
    async fn insert(&self, answer: NewAnswer) -> DomainResult<Answer> {
        let NewAnswer {
            question_id,
            owner_id,
            body,
            created_at,
        } = answer;

        let sql = format!(
            "INSERT INTO answers (question_id, owner_id, body, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {ANSWER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AnswerRow>(&sql)
            .bind(i64::from(question_id))
            .bind(i64::from(owner_id))
            .bind(body.as_str())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Answer::try_from(row)
    }

    async fn update_body(
        &self,
        id: AnswerId,
        body: AnswerBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Answer> {
        let sql = format!(
            "UPDATE answers SET body = $2, updated_at = $3 WHERE id = $1
             RETURNING {ANSWER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AnswerRow>(&sql)
            .bind(i64::from(id))
            .bind(body.into_inner())
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Answer::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::not_found("answer not found"))
    }

    #[tracing::instrument(skip(self))]
    async fn toggle_acceptance(
        &self,
        id: AnswerId,
        policy: AcceptancePolicy,
    ) -> DomainResult<AcceptancePlan> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Acceptance changes under one question serialise on its row.
        let question_id = sqlx::query_scalar::<_, i64>(
            "SELECT q.id FROM questions q JOIN answers a ON a.question_id = q.id
             WHERE a.id = $1 FOR UPDATE OF q",
        )
        .bind(i64::from(id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("answer not found"))?;

        let sql = format!(
            "SELECT {ANSWER_COLUMNS} FROM answers
             WHERE question_id = $1 AND (id = $2 OR accepted)
             ORDER BY created_at ASC, id ASC
             FOR UPDATE"
        );
        let candidates = sqlx::query_as::<_, AnswerRow>(&sql)
            .bind(question_id)
            .bind(i64::from(id))
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(Answer::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        let answer = candidates
            .iter()
            .find(|candidate| candidate.id == id)
            .ok_or_else(|| DomainError::not_found("answer not found"))?;

        let plan = AcceptancePlan::for_toggle(answer, &candidates, policy);

        for transition in plan.transitions() {
            sqlx::query("UPDATE answers SET accepted = $2 WHERE id = $1")
                .bind(i64::from(transition.answer_id))
                .bind(transition.to.is_accepted())
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;

            let credited =
                sqlx::query("UPDATE users SET reputation = reputation + $2 WHERE id = $1")
                    .bind(i64::from(transition.owner_id))
                    .bind(transition.reputation_delta)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_sqlx)?;
            if credited.rows_affected() == 0 {
                return Err(DomainError::not_found("answer owner not found"));
            }
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(plan)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_cascade(&self, id: AnswerId) -> DomainResult<CascadeReport> {
        let raw_id = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut report = CascadeReport::default();

        report.comments = sqlx::query("DELETE FROM comments WHERE post_kind = 'answer' AND post_id = $1")
            .bind(raw_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        report.votes = sqlx::query("DELETE FROM votes WHERE target_kind = 'answer' AND target_id = $1")
            .bind(raw_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        report.answers = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(raw_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        if report.answers == 0 {
            return Err(DomainError::not_found("answer not found"));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(report)
    }
}

#[derive(Clone)]
pub struct PostgresAnswerReadRepository {
    pool: PgPool,
}

impl PostgresAnswerReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_views(rows: Vec<AnswerViewRow>, viewer: Option<UserId>) -> DomainResult<Vec<AnswerView>> {
    rows.into_iter().map(|row| row.into_view(viewer)).collect()
}

#[async_trait]
impl AnswerReadRepository for PostgresAnswerReadRepository {
    async fn find_by_id(&self, id: AnswerId) -> DomainResult<Option<Answer>> {
        let sql = format!("SELECT {ANSWER_COLUMNS} FROM answers WHERE id = $1");
        let row = sqlx::query_as::<_, AnswerRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Answer::try_from).transpose()
    }

    async fn find_view(
        &self,
        id: AnswerId,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<AnswerView>> {
        let sql = format!("{ANSWER_VIEW_SELECT} WHERE a.id = $2");
        let row = sqlx::query_as::<_, AnswerViewRow>(&sql)
            .bind(viewer.map(i64::from))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|row| row.into_view(viewer)).transpose()
    }

    async fn list_for_question(
        &self,
        question: QuestionId,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> DomainResult<(Vec<AnswerView>, u64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM answers WHERE question_id = $1")
            .bind(i64::from(question))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let sql = format!(
            "{ANSWER_VIEW_SELECT} WHERE a.question_id = $2
             ORDER BY a.created_at ASC, a.id ASC LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, AnswerViewRow>(&sql)
            .bind(viewer.map(i64::from))
            .bind(i64::from(question))
            .bind(i64::from(page.limit))
            .bind(i64::from(page.skip))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((into_views(rows, viewer)?, count(total)))
    }

    async fn list_by_owner(&self, owner: UserId, limit: u32) -> DomainResult<Vec<AnswerView>> {
        let sql = format!(
            "{ANSWER_VIEW_SELECT} WHERE a.owner_id = $2
             ORDER BY a.created_at DESC, a.id DESC LIMIT $3"
        );
        let rows = sqlx::query_as::<_, AnswerViewRow>(&sql)
            .bind(None::<i64>)
            .bind(i64::from(owner))
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_views(rows, None)
    }
}
