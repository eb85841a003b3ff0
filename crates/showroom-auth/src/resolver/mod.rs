//! Link resolution: what slugs, if any, a share token or legacy id grants.

pub mod pipeline;
pub mod reference;

pub use pipeline::{LinkRejection, LinkResolver, Resolution, ResolvedGrant};
pub use reference::LinkReference;
