// src/infrastructure/repositories/postgres_vote.rs
use super::map_sqlx;
use super::rows::{count, kind_str, post_ref};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{UserId, VoteId};
use crate::domain::post::PostRef;
use crate::domain::vote::{Vote, VoteRepository, VoteTally, VoteValue};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresVoteRepository {
    pool: PgPool,
}

impl PostgresVoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VoteRow {
    id: i64,
    target_kind: String,
    target_id: i64,
    voter_id: i64,
    value: i16,
}

impl TryFrom<VoteRow> for Vote {
    type Error = DomainError;

    fn try_from(row: VoteRow) -> Result<Self, Self::Error> {
        Ok(Vote {
            id: VoteId::new(row.id)?,
            target: post_ref(&row.target_kind, row.target_id)?,
            voter: UserId::new(row.voter_id)?,
            value: VoteValue::try_from(i64::from(row.value))?,
        })
    }
}

#[derive(Debug, FromRow)]
struct TallyRow {
    votes_count: i64,
    score: i64,
}

fn vote_value(value: VoteValue) -> i16 {
    match value {
        VoteValue::Up => 1,
        VoteValue::Down => -1,
    }
}

#[async_trait]
impl VoteRepository for PostgresVoteRepository {
    async fn upsert(&self, target: PostRef, voter: UserId, value: VoteValue) -> DomainResult<Vote> {
        let row = sqlx::query_as::<_, VoteRow>(
            "INSERT INTO votes (target_kind, target_id, voter_id, value)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (voter_id, target_kind, target_id) DO UPDATE SET value = EXCLUDED.value
             RETURNING id, target_kind, target_id, voter_id, value",
        )
        .bind(kind_str(target))
        .bind(target.raw_id())
        .bind(i64::from(voter))
        .bind(vote_value(value))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Vote::try_from(row)
    }

    async fn remove(&self, target: PostRef, voter: UserId) -> DomainResult<bool> {
        let result = sqlx::query(
            "DELETE FROM votes WHERE target_kind = $1 AND target_id = $2 AND voter_id = $3",
        )
        .bind(kind_str(target))
        .bind(target.raw_id())
        .bind(i64::from(voter))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn tally(&self, target: PostRef, viewer: Option<UserId>) -> DomainResult<VoteTally> {
        let totals = sqlx::query_as::<_, TallyRow>(
            "SELECT COUNT(*) AS votes_count, COALESCE(SUM(value), 0)::BIGINT AS score
             FROM votes WHERE target_kind = $1 AND target_id = $2",
        )
        .bind(kind_str(target))
        .bind(target.raw_id())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let viewer_vote = match viewer {
            Some(voter) => sqlx::query_as::<_, VoteRow>(
                "SELECT id, target_kind, target_id, voter_id, value
                 FROM votes WHERE target_kind = $1 AND target_id = $2 AND voter_id = $3",
            )
            .bind(kind_str(target))
            .bind(target.raw_id())
            .bind(i64::from(voter))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .map(Vote::try_from)
            .transpose()?,
            None => None,
        };

        Ok(VoteTally {
            votes_count: count(totals.votes_count),
            score: totals.score,
            viewer_vote,
        })
    }
}
