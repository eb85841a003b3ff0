//! # showroom-api
//!
//! HTTP layer for the showroom built on Axum.
//!
//! Provides the page and JSON endpoints, the access guard middleware that
//! gates `/`, `/admin/**` and `/templates/**`, cookie handling for share
//! sessions and admin credentials, extractors, DTOs, and error mapping.

pub mod app;
pub mod cookies;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
