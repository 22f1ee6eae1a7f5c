//! World-construction error type.

use thiserror::Error;

use ga_core::Cell;

/// Errors produced while building a [`GridWorld`][crate::GridWorld].
///
/// Runtime queries never fail: out-of-bounds lookups answer `false` and
/// collecting an absent resource is a no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("{what} at {cell} is outside the {width}x{height} grid")]
    OutOfBounds {
        cell:   Cell,
        width:  i32,
        height: i32,
        what:   &'static str,
    },

    #[error("resource at {0} sits on an obstacle")]
    ResourceOnObstacle(Cell),
}

pub type WorldResult<T> = Result<T, WorldError>;
