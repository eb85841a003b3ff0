//! The link registry seam.

use async_trait::async_trait;

use showroom_core::result::AppResult;
use showroom_entity::share::ShareLink;

/// Persistent store of share link records.
///
/// Implementations are externally synchronized; concurrent edits resolve
/// last-write-wins.
#[async_trait]
pub trait LinkRegistry: Send + Sync + 'static {
    /// Fetch a link by id.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<ShareLink>>;

    /// All links, newest first.
    async fn list(&self) -> AppResult<Vec<ShareLink>>;

    /// Insert a new link. Fails with a conflict if the id is taken.
    async fn create(&self, link: &ShareLink) -> AppResult<ShareLink>;

    /// Replace an existing link. Fails with not-found if the id is unknown.
    async fn update(&self, link: &ShareLink) -> AppResult<ShareLink>;

    /// Delete a link. Returns `true` if a record was removed.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}
