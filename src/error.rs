//! Crate-level error types.

use thiserror::Error;

/// Malformed predicate input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("coordinate {value} is not finite")]
    NonFinite { value: f64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An interval comparison whose operands overlap.
///
/// Signals that the fast path cannot decide and the exact path has to run.
/// It never reaches callers of [`crate::filter::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("interval comparison is inconclusive")]
pub struct Inconclusive;

/// Outcome of a comparison that may not be decidable at the current precision.
pub type Uncertain<T> = std::result::Result<T, Inconclusive>;
