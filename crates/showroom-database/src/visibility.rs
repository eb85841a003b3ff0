//! The template visibility seam.

use std::collections::HashSet;

use async_trait::async_trait;

use showroom_core::result::AppResult;

/// Stores which catalog templates an admin has hidden.
///
/// Templates are visible unless explicitly hidden.
#[async_trait]
pub trait VisibilityStore: Send + Sync + 'static {
    /// Slugs currently hidden.
    async fn hidden_slugs(&self) -> AppResult<HashSet<String>>;

    /// Show or hide a template.
    async fn set_visible(&self, slug: &str, visible: bool) -> AppResult<()>;
}
