//! Template visibility repository implementation.

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;

use showroom_core::error::{AppError, ErrorKind};
use showroom_core::result::AppResult;

use crate::visibility::VisibilityStore;

/// PostgreSQL-backed [`VisibilityStore`].
#[derive(Debug, Clone)]
pub struct VisibilityRepository {
    pool: PgPool,
}

impl VisibilityRepository {
    /// Create a new visibility repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisibilityStore for VisibilityRepository {
    async fn hidden_slugs(&self) -> AppResult<HashSet<String>> {
        let rows: Vec<String> =
            sqlx::query_scalar("SELECT slug FROM template_visibility WHERE is_visible = FALSE")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to load visibility", e)
                })?;
        Ok(rows.into_iter().collect())
    }

    async fn set_visible(&self, slug: &str, visible: bool) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO template_visibility (slug, is_visible, updated_at) VALUES ($1, $2, NOW()) \
             ON CONFLICT (slug) DO UPDATE SET is_visible = EXCLUDED.is_visible, updated_at = NOW()",
        )
        .bind(slug)
        .bind(visible)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set visibility", e))?;
        Ok(())
    }
}
