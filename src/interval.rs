//! Conservative enclosures of real numbers.
//!
//! Every bound is computed with rounding toward +∞: the upper bound directly,
//! the lower bound as the negation of an upward-rounded negated expression.
//! The arithmetic therefore expects [`RoundingMode::Upward`] to be installed
//! for the whole evaluation (see [`Protector::upward`](crate::rounding::Protector::upward)).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{Inconclusive, Uncertain};
use crate::number::Number;
use crate::rounding::{self, RoundingMode};
use crate::sign::Sign;

/// A closed interval `[lower, upper]` known to contain some real value.
///
/// Infinite bounds mark an overflowed or undetermined enclosure; such an
/// interval never compares definitely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// The whole real line.
    pub const ENTIRE: Interval = Interval {
        lower: f64::NEG_INFINITY,
        upper: f64::INFINITY,
    };

    /// The interval `[lower, upper]`.
    /// NaN bounds or `lower > upper` give [`Interval::ENTIRE`].
    pub fn new(lower: f64, upper: f64) -> Self {
        if lower <= upper {
            Self { lower, upper }
        } else {
            Self::ENTIRE
        }
    }

    /// The degenerate interval `[x, x]`, exact for any finite `x`.
    pub fn point(x: f64) -> Self {
        Self::new(x, x)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn is_finite(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    pub fn is_point(&self) -> bool {
        self.lower == self.upper
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Upper bound on `upper - lower`.
    pub fn width(&self) -> f64 {
        let _guard = rounding::Protector::upward();
        rounding::sub(self.upper, self.lower)
    }

    /// Smallest interval containing both.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval {
            lower: self.lower.min(other.lower),
            upper: self.upper.max(other.upper),
        }
    }

    pub fn abs(&self) -> Interval {
        if self.lower >= 0.0 {
            *self
        } else if self.upper <= 0.0 {
            -*self
        } else {
            Interval {
                lower: 0.0,
                upper: self.upper.max(-self.lower),
            }
        }
    }

    /// The sign of every value in the interval, if they share one.
    pub fn sign(&self) -> Uncertain<Sign> {
        if !self.is_finite() {
            return Err(Inconclusive);
        }
        if self.lower > 0.0 {
            Ok(Sign::Positive)
        } else if self.upper < 0.0 {
            Ok(Sign::Negative)
        } else if self.lower == 0.0 && self.upper == 0.0 {
            Ok(Sign::Zero)
        } else {
            Err(Inconclusive)
        }
    }

    /// Orders two enclosures, if they do not overlap.
    /// Two equal points compare `Equal`.
    pub fn compare(&self, other: &Interval) -> Uncertain<Ordering> {
        if !self.is_finite() || !other.is_finite() {
            return Err(Inconclusive);
        }
        if self.upper < other.lower {
            Ok(Ordering::Less)
        } else if self.lower > other.upper {
            Ok(Ordering::Greater)
        } else if self.is_point() && other.is_point() {
            // Overlapping points are the same point.
            Ok(Ordering::Equal)
        } else {
            Err(Inconclusive)
        }
    }

    /// `[x * x]`, tighter than `self * self` when the interval straddles zero.
    pub fn square(&self) -> Interval {
        debug_assert_upward();
        if self.lower >= 0.0 {
            Interval::new(
                -rounding::mul(-self.lower, self.lower),
                rounding::mul(self.upper, self.upper),
            )
        } else if self.upper <= 0.0 {
            Interval::new(
                -rounding::mul(-self.upper, self.upper),
                rounding::mul(self.lower, self.lower),
            )
        } else {
            let m = self.upper.max(-self.lower);
            Interval::new(0.0, rounding::mul(m, m))
        }
    }

    /// Combines the four corner results of a monotone-per-argument operation.
    fn corners(&self, other: &Interval, op: fn(f64, f64) -> f64) -> Interval {
        let xs = [self.lower, self.upper];
        let ys = [other.lower, other.upper];
        let mut lower = f64::INFINITY;
        let mut upper = f64::NEG_INFINITY;
        for &x in &xs {
            for &y in &ys {
                let hi = op(x, y);
                let lo = -op(-x, y);
                if hi.is_nan() || lo.is_nan() {
                    return Interval::ENTIRE;
                }
                upper = upper.max(hi);
                lower = lower.min(lo);
            }
        }
        Interval::new(lower, upper)
    }
}

fn debug_assert_upward() {
    debug_assert_eq!(
        rounding::get(),
        RoundingMode::Upward,
        "interval arithmetic needs upward rounding"
    );
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

impl From<f64> for Interval {
    fn from(x: f64) -> Self {
        Interval::point(x)
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval {
            lower: -self.upper,
            upper: -self.lower,
        }
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        debug_assert_upward();
        Interval::new(
            -rounding::add(-self.lower, -rhs.lower),
            rounding::add(self.upper, rhs.upper),
        )
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        debug_assert_upward();
        Interval::new(
            -rounding::sub(rhs.upper, self.lower),
            rounding::sub(self.upper, rhs.lower),
        )
    }
}

impl Mul for Interval {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        debug_assert_upward();
        self.corners(&rhs, rounding::mul)
    }
}

impl Div for Interval {
    type Output = Interval;

    /// Division by an interval containing zero gives [`Interval::ENTIRE`].
    fn div(self, rhs: Interval) -> Interval {
        debug_assert_upward();
        if rhs.contains(0.0) {
            return Interval::ENTIRE;
        }
        self.corners(&rhs, rounding::div)
    }
}

impl Number for Interval {
    fn from_i32(v: i32) -> Self {
        Interval::point(v as f64)
    }

    fn sign(&self) -> Uncertain<Sign> {
        Interval::sign(self)
    }

    fn compare(&self, other: &Self) -> Uncertain<Ordering> {
        Interval::compare(self, other)
    }

    fn square(&self) -> Self {
        Interval::square(self)
    }
}
