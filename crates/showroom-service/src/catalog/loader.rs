//! Reads the static template catalog from disk.

use std::path::Path;

use tracing::info;

use showroom_core::error::{AppError, ErrorKind};
use showroom_core::result::AppResult;
use showroom_entity::template::{TemplateCatalog, TemplateEntry};

/// Loads the catalog JSON file at `path`.
pub async fn load_catalog(path: impl AsRef<Path>) -> AppResult<TemplateCatalog> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Configuration,
            format!("Failed to read template catalog '{}'", path.display()),
            e,
        )
    })?;

    let catalog = parse_catalog(&raw)?;
    info!(path = %path.display(), templates = catalog.len(), "Template catalog loaded");
    Ok(catalog)
}

/// Parses a JSON array of `{branch, name, type}` entries.
pub fn parse_catalog(raw: &str) -> AppResult<TemplateCatalog> {
    let entries: Vec<TemplateEntry> = serde_json::from_str(raw).map_err(|e| {
        AppError::with_source(
            ErrorKind::Configuration,
            format!("Invalid template catalog: {e}"),
            e,
        )
    })?;
    TemplateCatalog::new(entries)
}
