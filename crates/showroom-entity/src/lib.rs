//! # showroom-entity
//!
//! Domain models for the showroom access-control core. Share links are the
//! registry records admins manage; slug grants are what a link or session
//! resolves to; the template catalog is the read-only ground truth used to
//! turn link filters into concrete slugs.

pub mod share;
pub mod template;

pub use share::{CreateShareLink, LinkFilters, LinkStatus, ShareLink, SlugGrant, UpdateShareLink};
pub use template::{TemplateCatalog, TemplateEntry};
