//! # showroom-core
//!
//! Core crate for the showroom access-control layer. Contains the
//! configuration schemas, the process-wide signing secret, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other showroom crates.

pub mod config;
pub mod error;
pub mod result;
pub mod secret;

pub use error::AppError;
pub use result::AppResult;
pub use secret::SigningSecret;
