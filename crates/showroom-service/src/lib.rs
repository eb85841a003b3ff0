//! # showroom-service
//!
//! Business logic service layer for the showroom. Each service orchestrates
//! the storage seams, the template catalog and the token codec to implement
//! one group of use cases.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod catalog;
pub mod link;
pub mod tracking;

pub use catalog::{CatalogService, TemplateView, load_catalog, parse_catalog};
pub use link::{CreateLinkRequest, CreatedLink, LinkService, MintedToken};
pub use tracking::{TrackEvent, TrackEventType, TrackingService};
