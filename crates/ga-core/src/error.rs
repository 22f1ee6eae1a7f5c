//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `GaError` as one variant
//! where they surface core validation failures.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GaError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ga-core`.
pub type GaResult<T> = Result<T, GaError>;
