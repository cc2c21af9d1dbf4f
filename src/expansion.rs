//! Two-term floating-point expansions produced by error-free transformations,
//! following [Adaptive Precision Floating-Point Arithmetic and
//! Fast Robust Geometric Predicates](https://people.eecs.berkeley.edu/~jrs/papers/robustr.pdf).
//!
//! Terms are stored in increasing-magnitude order, so `arr[1]` is the
//! round-to-nearest result and `arr[0]` the exact roundoff.

use generic_array::{ArrayLength, GenericArray};
use typenum::U2;

/// An expansion whose size is its array size
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FixedExpansion<N: ArrayLength<f64>> {
    pub(crate) arr: GenericArray<f64, N>,
}

impl<N: ArrayLength<f64>> FixedExpansion<N> {
    pub(crate) fn new(arr: impl Into<GenericArray<f64, N>>) -> Self {
        Self { arr: arr.into() }
    }

    /// The largest-magnitude term.
    pub(crate) fn approximate(&self) -> f64 {
        self.arr[N::USIZE - 1]
    }
}

impl FixedExpansion<U2> {
    /// The roundoff dropped by `approximate`.
    pub(crate) fn err(&self) -> f64 {
        self.arr[0]
    }
}

/// Constructs an expansion from the sum of `a` and `b`.
/// The greater term is `a` + `b` with floating-point addition.
pub(crate) fn two_sum(a: f64, b: f64) -> FixedExpansion<U2> {
    let x = a + b;
    let bv = x - a;
    let av = x - bv;
    FixedExpansion::new([(a - av) + (b - bv), x])
}

/// Constructs an expansion from the difference of `a` and `b`.
pub(crate) fn two_diff(a: f64, b: f64) -> FixedExpansion<U2> {
    let x = a - b;
    let bv = a - x;
    let av = x + bv;
    FixedExpansion::new([(a - av) + (bv - b), x])
}

/// Constructs an expansion from the product of `a` and `b`.
/// Exact as long as the product does not underflow.
pub(crate) fn two_product(a: f64, b: f64) -> FixedExpansion<U2> {
    let x = a * b;
    FixedExpansion::new([a.mul_add(b, -x), x])
}
