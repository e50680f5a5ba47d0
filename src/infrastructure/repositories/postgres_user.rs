// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use super::rows::count;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    NewUser, PasswordHash, Reputation, User, UserId, UserRepository, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    reputation: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            reputation: Reputation(row.reputation),
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            password_hash,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, password_hash, created_at)
             VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, reputation, created_at",
        )
        .bind(username.as_str())
        .bind(password_hash.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, reputation, created_at
             FROM users WHERE username = $1",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, reputation, created_at
             FROM users WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn list_by_reputation(&self, limit: u32, skip: u32) -> DomainResult<(Vec<User>, u64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, reputation, created_at
             FROM users
             ORDER BY reputation DESC, id ASC
             LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(limit))
        .bind(i64::from(skip))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let users = rows
            .into_iter()
            .map(User::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((users, count(total)))
    }
}
