//! Per-thread rounding-mode register and directed floating-point operations.
//!
//! Rust code cannot soundly switch the hardware rounding mode, so the register
//! lives in thread-local storage and the arithmetic in this module emulates the
//! selected direction. Each operation rounds to nearest, recovers the exact
//! roundoff with an error-free transformation and steps one ulp in the
//! requested direction when the roundoff points that way.
//!
//! Interval arithmetic assumes [`RoundingMode::Upward`] for the whole
//! evaluation. Install it with a [`Protector`], which restores the previous
//! mode on every exit path, unwinding included.

use std::cell::Cell;

use crate::expansion::{two_diff, two_product, two_sum};

/// The direction in which inexact results are rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to even. The platform default.
    #[default]
    Nearest,
    TowardZero,
    /// Toward +∞.
    Upward,
    /// Toward -∞.
    Downward,
}

thread_local! {
    static MODE: Cell<RoundingMode> = const { Cell::new(RoundingMode::Nearest) };
}

/// The mode currently installed on this thread.
pub fn get() -> RoundingMode {
    MODE.with(Cell::get)
}

/// Installs `mode` without reporting the previous one.
pub fn set(mode: RoundingMode) {
    MODE.with(|m| m.set(mode));
}

/// Installs `mode` and returns the mode it replaced.
pub fn get_and_set(mode: RoundingMode) -> RoundingMode {
    MODE.with(|m| m.replace(mode))
}

/// Scoped rounding mode.
///
/// Holds the mode that was active when it was created and puts it back when
/// dropped.
#[derive(Debug)]
#[must_use = "the previous rounding mode is restored as soon as the protector is dropped"]
pub struct Protector {
    backup: RoundingMode,
}

impl Protector {
    pub fn new(mode: RoundingMode) -> Self {
        Self {
            backup: get_and_set(mode),
        }
    }

    /// The mode interval arithmetic needs.
    pub fn upward() -> Self {
        Self::new(RoundingMode::Upward)
    }

    /// The mode that will be restored.
    pub fn backup(&self) -> RoundingMode {
        self.backup
    }
}

impl Drop for Protector {
    fn drop(&mut self) {
        set(self.backup);
    }
}

/// Which side of the rounded result the exact result lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Residual {
    Exact,
    Above,
    Below,
    /// Underflow destroyed the roundoff; only "inexact" is known.
    Unknown,
}

impl Residual {
    fn of(err: f64) -> Self {
        if err > 0.0 {
            Residual::Above
        } else if err < 0.0 {
            Residual::Below
        } else {
            Residual::Exact
        }
    }
}

/// The next representable value toward +∞.
pub fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// The next representable value toward -∞.
pub fn next_down(x: f64) -> f64 {
    -next_up(-x)
}

/// Rounds a round-to-nearest result according to `mode`.
/// `finite_inputs` tells whether an infinite `x` came from overflow.
fn directed(mode: RoundingMode, x: f64, residual: Residual, finite_inputs: bool) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        if !finite_inputs {
            return x;
        }
        // Overflow: nearest gives ±∞, the directed modes may saturate.
        return match mode {
            RoundingMode::Nearest => x,
            RoundingMode::Upward if x < 0.0 => f64::MIN,
            RoundingMode::Downward if x > 0.0 => f64::MAX,
            RoundingMode::TowardZero => x.signum() * f64::MAX,
            _ => x,
        };
    }
    match (mode, residual) {
        (RoundingMode::Nearest, _) | (_, Residual::Exact) => x,
        (RoundingMode::Upward, Residual::Above | Residual::Unknown) => next_up(x),
        (RoundingMode::Downward, Residual::Below | Residual::Unknown) => next_down(x),
        (RoundingMode::TowardZero, Residual::Below) if x > 0.0 => next_down(x),
        (RoundingMode::TowardZero, Residual::Above) if x < 0.0 => next_up(x),
        // Best effort: subnormal products are left as rounded to nearest.
        _ => x,
    }
}

fn finite(a: f64, b: f64) -> bool {
    a.is_finite() && b.is_finite()
}

/// `a + b` rounded in the current mode.
pub fn add(a: f64, b: f64) -> f64 {
    let s = two_sum(a, b);
    directed(get(), s.approximate(), Residual::of(s.err()), finite(a, b))
}

/// `a - b` rounded in the current mode.
pub fn sub(a: f64, b: f64) -> f64 {
    let d = two_diff(a, b);
    directed(get(), d.approximate(), Residual::of(d.err()), finite(a, b))
}

/// `a * b` rounded in the current mode.
pub fn mul(a: f64, b: f64) -> f64 {
    let p = two_product(a, b);
    let x = p.approximate();
    // Below this magnitude the fused roundoff may itself be rounded away.
    let residual = if x != 0.0 && x.abs() >= TINY_PRODUCT {
        Residual::of(p.err())
    } else if a == 0.0 || b == 0.0 {
        Residual::Exact
    } else {
        Residual::Unknown
    };
    directed(get(), x, residual, finite(a, b))
}

/// `a / b` rounded in the current mode.
pub fn div(a: f64, b: f64) -> f64 {
    let q = a / b;
    let residual = if a == 0.0 || !q.is_finite() || b.is_infinite() {
        Residual::Exact
    } else if q.abs() >= TINY_PRODUCT && a.abs() >= TINY_PRODUCT {
        // a - q*b is exact here; the true quotient is q + r/b.
        let r = (-q).mul_add(b, a);
        if r == 0.0 {
            Residual::Exact
        } else if (r > 0.0) == (b > 0.0) {
            Residual::Above
        } else {
            Residual::Below
        }
    } else {
        Residual::Unknown
    };
    directed(get(), q, residual, finite(a, b))
}

/// 2^-969: products and quotients above this keep an exact roundoff.
const TINY_PRODUCT: f64 = f64::MIN_POSITIVE * 9007199254740992.0;
