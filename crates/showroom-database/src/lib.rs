//! # showroom-database
//!
//! Storage seams consumed by the access-control core, with PostgreSQL
//! repositories and in-memory stand-ins behind the same traits.
//!
//! - [`LinkRegistry`]: share link records (get-by-id, list, create, update, delete)
//! - [`VisibilityStore`]: admin toggles hiding catalog templates

pub mod connection;
pub mod memory;
pub mod migration;
pub mod registry;
pub mod repositories;
pub mod visibility;

pub use connection::DatabasePool;
pub use registry::LinkRegistry;
pub use visibility::VisibilityStore;
