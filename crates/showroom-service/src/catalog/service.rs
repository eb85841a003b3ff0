//! Visibility-aware views over the template catalog.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use showroom_core::error::AppError;
use showroom_core::result::AppResult;
use showroom_database::visibility::VisibilityStore;
use showroom_entity::share::SlugGrant;
use showroom_entity::template::{TemplateCatalog, TemplateEntry};

/// A catalog entry as shown to admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateView {
    /// `branch/name`.
    pub slug: String,
    /// The catalog entry.
    #[serde(flatten)]
    pub entry: TemplateEntry,
    /// Whether visitors can currently see it.
    pub visible: bool,
}

/// Combines the static catalog with admin visibility toggles.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<TemplateCatalog>,
    visibility: Arc<dyn VisibilityStore>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("templates", &self.catalog.len())
            .finish()
    }
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(catalog: Arc<TemplateCatalog>, visibility: Arc<dyn VisibilityStore>) -> Self {
        Self {
            catalog,
            visibility,
        }
    }

    /// Every catalog entry with its visibility, in catalog order.
    pub async fn list_all(&self) -> AppResult<Vec<TemplateView>> {
        let hidden = self.visibility.hidden_slugs().await?;
        Ok(self
            .catalog
            .entries()
            .iter()
            .map(|entry| {
                let slug = entry.slug();
                TemplateView {
                    visible: !hidden.contains(&slug),
                    slug,
                    entry: entry.clone(),
                }
            })
            .collect())
    }

    /// The templates a grant finally shows: grant, catalog and visibility
    /// intersected, in catalog order.
    pub async fn visible_for(&self, grant: &SlugGrant) -> AppResult<Vec<TemplateEntry>> {
        let hidden = self.visibility.hidden_slugs().await?;
        Ok(self
            .catalog
            .select(grant)
            .into_iter()
            .filter(|entry| !hidden.contains(&entry.slug()))
            .cloned()
            .collect())
    }

    /// Looks up one template, reporting whether it is visible.
    pub async fn find(&self, slug: &str) -> AppResult<Option<TemplateView>> {
        let Some(entry) = self.catalog.get(slug) else {
            return Ok(None);
        };
        let hidden = self.visibility.hidden_slugs().await?;
        Ok(Some(TemplateView {
            slug: slug.to_string(),
            entry: entry.clone(),
            visible: !hidden.contains(slug),
        }))
    }

    /// Shows or hides a catalog template.
    pub async fn set_visibility(&self, slug: &str, visible: bool) -> AppResult<TemplateView> {
        let entry = self
            .catalog
            .get(slug)
            .ok_or_else(|| AppError::not_found(format!("Template '{slug}' not found")))?;

        self.visibility.set_visible(slug, visible).await?;
        info!(slug = %slug, visible, "Template visibility changed");

        Ok(TemplateView {
            slug: slug.to_string(),
            entry: entry.clone(),
            visible,
        })
    }
}
