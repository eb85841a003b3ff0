//! The read-only template catalog and link-filter resolution against it.

use std::collections::HashSet;

use showroom_core::error::AppError;
use showroom_core::result::AppResult;

use super::entry::TemplateEntry;
use crate::share::{LinkFilters, ShareLink, SlugGrant};

/// Static catalog of templates, in display order.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    entries: Vec<TemplateEntry>,
}

impl TemplateCatalog {
    /// Builds a catalog, rejecting malformed or duplicate slugs.
    pub fn new(entries: Vec<TemplateEntry>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.branch.is_empty()
                || entry.name.is_empty()
                || entry.branch.contains('/')
                || entry.name.contains('/')
            {
                return Err(AppError::validation(format!(
                    "Invalid catalog entry '{}'",
                    entry.slug()
                )));
            }
            if !seen.insert(entry.slug()) {
                return Err(AppError::validation(format!(
                    "Duplicate catalog slug '{}'",
                    entry.slug()
                )));
            }
        }
        Ok(Self { entries })
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by slug.
    pub fn get(&self, slug: &str) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.has_slug(slug))
    }

    /// Returns `true` if `slug` names a known template.
    pub fn contains(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    /// Every slug in catalog order.
    pub fn all_slugs(&self) -> Vec<String> {
        self.entries.iter().map(TemplateEntry::slug).collect()
    }

    /// Slugs matching `filters`; empty filters match the whole catalog.
    pub fn resolve_filters(&self, filters: &LinkFilters) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| filters.matches(&e.branch, &e.kind))
            .map(TemplateEntry::slug)
            .collect()
    }

    /// The concrete slugs a registry link grants. A non-empty allow-list is
    /// used verbatim and the filters are not consulted.
    pub fn resolve_link(&self, link: &ShareLink) -> Vec<String> {
        if let Some(slugs) = link.explicit_slugs() {
            return slugs.to_vec();
        }
        match &link.filters {
            Some(filters) => self.resolve_filters(filters),
            None => self.all_slugs(),
        }
    }

    /// Entries covered by `grant`, in catalog order. Slugs the catalog does
    /// not know are dropped.
    pub fn select<'a>(&'a self, grant: &SlugGrant) -> Vec<&'a TemplateEntry> {
        self.entries
            .iter()
            .filter(|e| grant.allows(&e.slug()))
            .collect()
    }
}
