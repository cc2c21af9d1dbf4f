//! Filtered geometric predicates.
//!
//! A predicate is evaluated first over [`Interval`] enclosures of its
//! arguments, with rounding directed toward +∞ for the whole evaluation.
//! If the resulting enclosure cannot certify the answer, the same predicate is
//! evaluated again over exact [`rug::Rational`] values.
//! Callers only ever see the definite answer.
//!
//! ```
//! use robust_filter::geo::{orient_2d, point2};
//! use robust_filter::Orientation;
//!
//! let a = point2(0.1, 0.1)?;
//! let b = point2(0.2, 0.2)?;
//! let c = point2(0.3, 0.3)?;
//! assert_eq!(orient_2d(&a, &b, &c), Orientation::Collinear);
//! # Ok::<(), robust_filter::Error>(())
//! ```

mod error;
mod expansion;
pub mod filter;
mod filtered;
pub mod geo;
mod interval;
mod number;
pub mod predicates;
pub mod rounding;
mod sign;

pub use error::{Error, Inconclusive, Result, Uncertain};
pub use filter::{evaluate, Filter, FilterConfig, Path, Predicate, Strategy};
pub use filtered::{Approximation, Filtered};
pub use interval::Interval;
pub use number::Number;
pub use sign::{BoundedSide, Orientation, OrientedSide, Sign};
