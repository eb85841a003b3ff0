//! PostgreSQL repository implementations.

pub mod share_link;
pub mod visibility;

pub use share_link::ShareLinkRepository;
pub use visibility::VisibilityRepository;
