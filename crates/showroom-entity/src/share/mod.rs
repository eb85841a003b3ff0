//! Share link domain entities.

pub mod grant;
pub mod link;

pub use grant::SlugGrant;
pub use link::{CreateShareLink, LinkFilters, LinkStatus, ShareLink, UpdateShareLink};
