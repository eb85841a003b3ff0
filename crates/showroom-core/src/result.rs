//! Convenience result type alias for the showroom crates.

use crate::error::AppError;

/// A specialized `Result` type for showroom operations.
pub type AppResult<T> = Result<T, AppError>;
