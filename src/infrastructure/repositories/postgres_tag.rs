// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use super::rows::{TAG_SELECT, TagRow, count};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{Tag, TagId, TagName, TagRepository};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: i64) -> DomainResult<Option<Tag>> {
        let sql = format!("{TAG_SELECT} WHERE t.id = $1");
        let row = sqlx::query_as::<_, TagRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Tag::try_from).transpose()
    }
}

/// `LIKE` pattern matching names that start with `prefix` literally.
fn prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_names(&self, names: &[TagName]) -> DomainResult<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<&str> = names.iter().map(TagName::as_str).collect();
        let sql = format!("{TAG_SELECT} WHERE t.name = ANY($1)");
        let rows = sqlx::query_as::<_, TagRow>(&sql)
            .bind(&raw)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn insert_or_get(&self, name: &TagName) -> DomainResult<Tag> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO tags (name, info) VALUES ($1, '')
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING id",
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.fetch(id)
            .await?
            .ok_or_else(|| DomainError::Persistence(format!("tag {id} vanished after upsert")))
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        self.fetch(i64::from(id)).await
    }

    async fn list(
        &self,
        limit: u32,
        skip: u32,
        prefix: Option<&str>,
    ) -> DomainResult<(Vec<Tag>, u64)> {
        let pattern = prefix
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(prefix_pattern);

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM tags t WHERE ($1::TEXT IS NULL OR t.name LIKE $1)",
        )
        .bind(pattern.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let sql = format!(
            "{TAG_SELECT} WHERE ($1::TEXT IS NULL OR t.name LIKE $1)
             ORDER BY t.name ASC LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, TagRow>(&sql)
            .bind(pattern.as_deref())
            .bind(i64::from(limit))
            .bind(i64::from(skip))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let tags = rows
            .into_iter()
            .map(Tag::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((tags, count(total)))
    }

    async fn update_info(&self, id: TagId, info: String) -> DomainResult<Tag> {
        let updated = sqlx::query("UPDATE tags SET info = $2 WHERE id = $1")
            .bind(i64::from(id))
            .bind(info)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if updated.rows_affected() == 0 {
            return Err(DomainError::not_found("tag not found"));
        }

        self.fetch(i64::from(id))
            .await?
            .ok_or_else(|| DomainError::not_found("tag not found"))
    }
}
