//! DashMap-backed link registry.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use showroom_core::error::AppError;
use showroom_core::result::AppResult;
use showroom_entity::share::ShareLink;

use crate::registry::LinkRegistry;

/// Process-local [`LinkRegistry`].
#[derive(Debug, Default)]
pub struct MemoryLinkRegistry {
    links: DashMap<String, ShareLink>,
}

impl MemoryLinkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with `links`.
    pub fn with_links(links: impl IntoIterator<Item = ShareLink>) -> Self {
        let registry = Self::new();
        for link in links {
            registry.links.insert(link.id.clone(), link);
        }
        registry
    }
}

#[async_trait]
impl LinkRegistry for MemoryLinkRegistry {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<ShareLink>> {
        Ok(self.links.get(id).map(|l| l.value().clone()))
    }

    async fn list(&self) -> AppResult<Vec<ShareLink>> {
        let mut links: Vec<ShareLink> = self.links.iter().map(|l| l.value().clone()).collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(links)
    }

    async fn create(&self, link: &ShareLink) -> AppResult<ShareLink> {
        match self.links.entry(link.id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Share link '{}' already exists",
                link.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(link.clone());
                Ok(link.clone())
            }
        }
    }

    async fn update(&self, link: &ShareLink) -> AppResult<ShareLink> {
        match self.links.get_mut(&link.id) {
            Some(mut existing) => {
                *existing = link.clone();
                Ok(link.clone())
            }
            None => Err(AppError::not_found(format!(
                "Share link '{}' not found",
                link.id
            ))),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.links.remove(id).is_some())
    }
}
