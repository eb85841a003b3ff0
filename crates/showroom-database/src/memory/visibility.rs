//! DashSet-backed visibility store.

use std::collections::HashSet;

use async_trait::async_trait;
use dashmap::DashSet;

use showroom_core::result::AppResult;

use crate::visibility::VisibilityStore;

/// Process-local [`VisibilityStore`].
#[derive(Debug, Default)]
pub struct MemoryVisibilityStore {
    hidden: DashSet<String>,
}

impl MemoryVisibilityStore {
    /// Creates a store where every template is visible.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VisibilityStore for MemoryVisibilityStore {
    async fn hidden_slugs(&self) -> AppResult<HashSet<String>> {
        Ok(self.hidden.iter().map(|s| s.key().clone()).collect())
    }

    async fn set_visible(&self, slug: &str, visible: bool) -> AppResult<()> {
        if visible {
            self.hidden.remove(slug);
        } else {
            self.hidden.insert(slug.to_string());
        }
        Ok(())
    }
}
