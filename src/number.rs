//! The arithmetic a predicate is written against.
//!
//! A predicate body is generic over [`Number`] and evaluated twice at most:
//! once over [`Interval`](crate::Interval), where comparisons may be
//! [`Inconclusive`](crate::Inconclusive), and once over [`Rational`], where
//! they never are.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use rug::Rational;

use crate::error::Uncertain;
use crate::sign::Sign;

/// A ring with a possibly undecidable order.
pub trait Number:
    Clone
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn from_i32(v: i32) -> Self;

    fn sign(&self) -> Uncertain<Sign>;

    fn compare(&self, other: &Self) -> Uncertain<Ordering>;

    fn square(&self) -> Self {
        self.clone() * self.clone()
    }
}

impl Number for Rational {
    fn from_i32(v: i32) -> Self {
        Rational::from(v)
    }

    fn sign(&self) -> Uncertain<Sign> {
        Ok(Sign::of_ordering(self.cmp0()))
    }

    fn compare(&self, other: &Self) -> Uncertain<Ordering> {
        Ok(self.cmp(other))
    }

    fn square(&self) -> Self {
        Rational::square(self.clone())
    }
}
