//! Share link repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use showroom_core::error::{AppError, ErrorKind};
use showroom_core::result::AppResult;
use showroom_entity::share::{LinkFilters, ShareLink};

use crate::registry::LinkRegistry;

/// Row shape of the `share_links` table.
#[derive(Debug, FromRow)]
struct ShareLinkRow {
    id: String,
    name: String,
    filters: Option<Json<LinkFilters>>,
    allowed_slugs: Option<Vec<String>>,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    is_active: bool,
}

impl From<ShareLinkRow> for ShareLink {
    fn from(row: ShareLinkRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            filters: row.filters.map(|f| f.0),
            allowed_slugs: row.allowed_slugs,
            created_at: row.created_at,
            expires_at: row.expires_at,
            is_active: row.is_active,
        }
    }
}

/// PostgreSQL-backed [`LinkRegistry`].
#[derive(Debug, Clone)]
pub struct ShareLinkRepository {
    pool: PgPool,
}

impl ShareLinkRepository {
    /// Create a new share link repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Flip the kill switch without touching other fields.
    pub async fn set_active(&self, id: &str, is_active: bool) -> AppResult<bool> {
        let result = sqlx::query("UPDATE share_links SET is_active = $2 WHERE id = $1")
            .bind(id)
            .bind(is_active)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to toggle share link", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl LinkRegistry for ShareLinkRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<ShareLink>> {
        sqlx::query_as::<_, ShareLinkRow>("SELECT * FROM share_links WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(ShareLink::from))
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find share link", e))
    }

    async fn list(&self) -> AppResult<Vec<ShareLink>> {
        sqlx::query_as::<_, ShareLinkRow>("SELECT * FROM share_links ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map(|rows| rows.into_iter().map(ShareLink::from).collect())
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list share links", e)
            })
    }

    async fn create(&self, link: &ShareLink) -> AppResult<ShareLink> {
        sqlx::query_as::<_, ShareLinkRow>(
            "INSERT INTO share_links (id, name, filters, allowed_slugs, created_at, expires_at, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&link.id)
        .bind(&link.name)
        .bind(link.filters.clone().map(Json))
        .bind(&link.allowed_slugs)
        .bind(link.created_at)
        .bind(link.expires_at)
        .bind(link.is_active)
        .fetch_one(&self.pool)
        .await
        .map(ShareLink::from)
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::conflict(format!("Share link '{}' already exists", link.id))
            }
            other => {
                AppError::with_source(ErrorKind::Database, "Failed to create share link", other)
            }
        })
    }

    async fn update(&self, link: &ShareLink) -> AppResult<ShareLink> {
        sqlx::query_as::<_, ShareLinkRow>(
            "UPDATE share_links SET name = $2, filters = $3, allowed_slugs = $4, expires_at = $5, \
             is_active = $6 WHERE id = $1 RETURNING *",
        )
        .bind(&link.id)
        .bind(&link.name)
        .bind(link.filters.clone().map(Json))
        .bind(&link.allowed_slugs)
        .bind(link.expires_at)
        .bind(link.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update share link", e))?
        .map(ShareLink::from)
        .ok_or_else(|| AppError::not_found(format!("Share link '{}' not found", link.id)))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM share_links WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete share link", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
