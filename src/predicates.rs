//! Predicates written once over [`Number`].
//!
//! Each predicate is a unit struct implementing [`Predicate`], so the same
//! body serves the interval stage and the exact stage of
//! [`Filter::evaluate`](crate::filter::Filter::evaluate).

use std::cmp::Ordering;

use crate::error::Uncertain;
use crate::filter::Predicate;
use crate::number::Number;
use crate::sign::{Orientation, OrientedSide, Sign};

// Declares a unit struct and its `Predicate<N>` impl.
// The argument list destructures the `[&T; N]` the filter passes in.
macro_rules! predicate {
    ($(#[$meta:meta])* $name:ident<$n:literal>($($arg:ident),+) -> $out:ty $body:block) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Predicate<$n> for $name {
            type Output = $out;

            #[allow(clippy::many_single_char_names)]
            fn eval<T: Number>(&self, [$($arg),+]: [&T; $n]) -> Uncertain<$out> $body
        }
    };
}

fn diff<T: Number>(a: &T, b: &T) -> T {
    a.clone() - b.clone()
}

/// `a00 * a11 - a01 * a10`
pub fn determinant2<T: Number>(a00: &T, a01: &T, a10: &T, a11: &T) -> T {
    a00.clone() * a11.clone() - a01.clone() * a10.clone()
}

/// Cofactor expansion along the first row.
#[rustfmt::skip]
pub fn determinant3<T: Number>(
    a00: &T, a01: &T, a02: &T,
    a10: &T, a11: &T, a12: &T,
    a20: &T, a21: &T, a22: &T,
) -> T {
    let m0 = determinant2(a11, a12, a21, a22);
    let m1 = determinant2(a10, a12, a20, a22);
    let m2 = determinant2(a10, a11, a20, a21);
    a00.clone() * m0 - a01.clone() * m1 + a02.clone() * m2
}

predicate! {
    /// Orientation of the triangle `p`, `q`, `r`.
    Orientation2<6>(px, py, qx, qy, rx, ry) -> Orientation {
        let det = determinant2(&diff(qx, px), &diff(qy, py), &diff(rx, px), &diff(ry, py));
        det.sign().map(Orientation::from)
    }
}

predicate! {
    /// Orientation of the tetrahedron `p`, `q`, `r`, `s`.
    /// Counterclockwise when `s` lies on the positive side of the plane
    /// through `p`, `q`, `r` (right-hand rule).
    Orientation3<12>(px, py, pz, qx, qy, qz, rx, ry, rz, sx, sy, sz) -> Orientation {
        let det = determinant3(
            &diff(qx, px), &diff(rx, px), &diff(sx, px),
            &diff(qy, py), &diff(ry, py), &diff(sy, py),
            &diff(qz, pz), &diff(rz, pz), &diff(sz, pz),
        );
        det.sign().map(Orientation::from)
    }
}

predicate! {
    /// Side of `t` with respect to the circle through `p`, `q`, `r`,
    /// oriented by the orientation of `p`, `q`, `r`.
    /// Positive inside a counterclockwise circle.
    SideOfOrientedCircle2<8>(px, py, qx, qy, rx, ry, tx, ty) -> OrientedSide {
        let (qpx, qpy) = (diff(qx, px), diff(qy, py));
        let (rpx, rpy) = (diff(rx, px), diff(ry, py));
        let (tpx, tpy) = (diff(tx, px), diff(ty, py));
        let a = determinant2(&qpx, &qpy, &tpx, &tpy);
        let b = tpx.clone() * diff(tx, qx) + tpy.clone() * diff(ty, qy);
        let c = determinant2(&qpx, &qpy, &rpx, &rpy);
        let d = rpx.clone() * diff(rx, qx) + rpy.clone() * diff(ry, qy);
        determinant2(&a, &b, &c, &d).sign().map(OrientedSide::from)
    }
}

predicate! {
    /// Side of the weighted point `t` with respect to the smallest circle
    /// orthogonal to the weighted points `p` and `q`.
    /// Positive inside.
    InSmallestOrthogonalCircle2<9>(px, py, pw, qx, qy, qw, tx, ty, tw) -> OrientedSide {
        let (dpx, dpy) = (diff(px, qx), diff(py, qy));
        let (dtx, dty) = (diff(tx, qx), diff(ty, qy));
        let dpz = dpx.square() + dpy.square();
        let t_power = dtx.square() + dty.square() - tw.clone() + qw.clone();
        let p_power = dpz.clone() - pw.clone() + qw.clone();
        let expr = -(t_power * dpz) + p_power * (dpx * dtx + dpy * dty);
        expr.sign().map(OrientedSide::from)
    }
}

predicate! {
    CompareX2<2>(px, qx) -> Ordering {
        px.compare(qx)
    }
}

predicate! {
    /// Lexicographic order of `p` and `q`, `x` first.
    CompareXY2<4>(px, py, qx, qy) -> Ordering {
        match px.compare(qx)? {
            Ordering::Equal => py.compare(qy),
            ord => Ok(ord),
        }
    }
}

predicate! {
    /// Whether `q` is closer to `p` than `r` is.
    CompareDistance2<6>(px, py, qx, qy, rx, ry) -> Ordering {
        let dq = diff(qx, px).square() + diff(qy, py).square();
        let dr = diff(rx, px).square() + diff(ry, py).square();
        dq.compare(&dr)
    }
}

predicate! {
    SignOfDeterminant2<4>(a00, a01, a10, a11) -> Sign {
        determinant2(a00, a01, a10, a11).sign()
    }
}

predicate! {
    #[rustfmt::skip]
    SignOfDeterminant3<9>(a00, a01, a02, a10, a11, a12, a20, a21, a22) -> Sign {
        determinant3(a00, a01, a02, a10, a11, a12, a20, a21, a22).sign()
    }
}
