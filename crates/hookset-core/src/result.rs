//! Convenience result type alias for hookset.

use crate::error::AppError;

/// A specialized `Result` type for hookset operations.
///
/// Hook callbacks, registration, and dispatch all return this so that a
/// failing callback can be propagated with the `?` operator.
pub type AppResult<T> = Result<T, AppError>;
