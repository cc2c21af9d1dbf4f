//! Numbers carrying a cheap enclosure and an exact value, both built lazily.

use std::fmt::Debug;

use once_cell::sync::OnceCell;
use rug::Rational;

use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::rounding::{next_down, next_up};

/// A source of coordinates that can be enclosed by an [`Interval`] and
/// converted exactly to a [`Rational`].
///
/// The enclosure must contain the exact value.
pub trait Approximation: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Rejects values with no exact counterpart.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn to_interval(&self) -> Interval;

    /// # Panics
    ///
    /// If `validate` would fail.
    fn to_exact(&self) -> Rational;
}

/// Floats convert to the exact value of their binary representation.
impl Approximation for f64 {
    fn validate(&self) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(Error::NonFinite { value: *self })
        }
    }

    fn to_interval(&self) -> Interval {
        Interval::point(*self)
    }

    fn to_exact(&self) -> Rational {
        match Rational::from_f64(*self) {
            Some(r) => r,
            None => panic!("{} has no exact value", self),
        }
    }
}

impl Approximation for f32 {
    fn validate(&self) -> Result<()> {
        f64::from(*self).validate()
    }

    fn to_interval(&self) -> Interval {
        Interval::point(f64::from(*self))
    }

    fn to_exact(&self) -> Rational {
        f64::from(*self).to_exact()
    }
}

impl Approximation for i32 {
    fn to_interval(&self) -> Interval {
        Interval::point(f64::from(*self))
    }

    fn to_exact(&self) -> Rational {
        Rational::from(*self)
    }
}

impl Approximation for i64 {
    /// Exact below 2^53 in magnitude, one ulp wide on each side above.
    fn to_interval(&self) -> Interval {
        let x = *self as f64;
        if x as i128 == i128::from(*self) {
            Interval::point(x)
        } else {
            Interval::new(next_down(x), next_up(x))
        }
    }

    fn to_exact(&self) -> Rational {
        Rational::from(*self)
    }
}

/// A coordinate with a memoized interval and a memoized exact value.
///
/// Both representations are derived from the source on first access and
/// never recomputed. The caches are write-once, so a `Filtered` may be
/// shared between threads.
#[derive(Clone, Debug)]
pub struct Filtered<A: Approximation = f64> {
    source: A,
    interval: OnceCell<Interval>,
    exact: OnceCell<Rational>,
}

impl<A: Approximation> Filtered<A> {
    pub fn new(source: A) -> Result<Self> {
        source.validate()?;
        Ok(Self {
            source,
            interval: OnceCell::new(),
            exact: OnceCell::new(),
        })
    }

    pub fn source(&self) -> &A {
        &self.source
    }

    /// Enclosure of the value, computed on first call.
    pub fn approx(&self) -> &Interval {
        self.interval.get_or_init(|| self.source.to_interval())
    }

    /// Exact value, computed on first call.
    pub fn exact(&self) -> &Rational {
        self.exact.get_or_init(|| {
            log::trace!("materializing exact value of {:?}", self.source);
            self.source.to_exact()
        })
    }

    /// Whether the exact value has been materialized yet.
    pub fn has_exact(&self) -> bool {
        self.exact.get().is_some()
    }
}

impl<A: Approximation> PartialEq for Filtered<A> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl TryFrom<f64> for Filtered {
    type Error = Error;

    fn try_from(x: f64) -> Result<Self> {
        Filtered::new(x)
    }
}

impl From<i32> for Filtered {
    fn from(x: i32) -> Self {
        Self {
            source: f64::from(x),
            interval: OnceCell::new(),
            exact: OnceCell::new(),
        }
    }
}
