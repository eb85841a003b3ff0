//! Visit and click tracking.

pub mod service;

pub use service::{TrackEvent, TrackEventType, TrackingService};
