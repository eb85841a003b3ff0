//! Template catalog entities.

pub mod catalog;
pub mod entry;

pub use catalog::TemplateCatalog;
pub use entry::TemplateEntry;
