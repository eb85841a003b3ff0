//! In-memory store implementations for development and tests.

pub mod link;
pub mod visibility;

pub use link::MemoryLinkRegistry;
pub use visibility::MemoryVisibilityStore;
