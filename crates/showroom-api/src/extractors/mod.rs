//! Custom Axum extractors.

pub mod admin;
pub mod viewer;

pub use admin::AdminUser;
pub use viewer::CurrentViewer;
