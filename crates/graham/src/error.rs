//! Errors surfaced by the hull pipeline.
//!
//! None of these are retried or recovered from inside the crate; they always
//! propagate to the caller.

use thiserror::Error;

use crate::Point;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// The point set had no points at all.
    #[error("cannot compute a hull of an empty point set")]
    EmptyInput,
    /// A point's slope key `y / x` is undefined (x is zero) or not finite.
    #[error("slope key undefined for point ({x}, {y}) at remaining index {index}", x = .point.x, y = .point.y)]
    DegenerateGeometry { point: Point, index: usize },
    /// Fewer than three points under `SmallInputPolicy::Reject`.
    #[error("need at least 3 points for a hull, got {got}")]
    InsufficientPoints { got: usize },
    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate at input index {index}")]
    NonFinite { index: usize },
}
