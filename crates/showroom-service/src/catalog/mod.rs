//! Template catalog loading and visibility filtering.

pub mod loader;
pub mod service;

pub use loader::{load_catalog, parse_catalog};
pub use service::{CatalogService, TemplateView};
