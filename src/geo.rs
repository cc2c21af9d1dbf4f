//! Contains the geometric tests

use std::cmp::Ordering;

use nalgebra::{Vector2, Vector3};

use crate::error::Result;
use crate::filter::evaluate;
use crate::filtered::Filtered;
use crate::predicates::{
    CompareDistance2, CompareX2, CompareXY2, InSmallestOrthogonalCircle2, Orientation2,
    Orientation3, SideOfOrientedCircle2,
};
use crate::sign::{Orientation, OrientedSide};

pub type Point2 = Vector2<Filtered>;
pub type Point3 = Vector3<Filtered>;

pub fn point2(x: f64, y: f64) -> Result<Point2> {
    Ok(Point2::new(Filtered::new(x)?, Filtered::new(y)?))
}

pub fn point3(x: f64, y: f64, z: f64) -> Result<Point3> {
    Ok(Point3::new(
        Filtered::new(x)?,
        Filtered::new(y)?,
        Filtered::new(z)?,
    ))
}

/// A point with a power weight (a circle of squared radius `weight`).
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedPoint2 {
    pub point: Point2,
    pub weight: Filtered,
}

impl WeightedPoint2 {
    pub fn new(x: f64, y: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            point: point2(x, y)?,
            weight: Filtered::new(weight)?,
        })
    }
}

/// Calculates the orientation of points `a`, `b`, `c` in a plane.
/// `CounterClockwise` if they define a left turn,
/// `Clockwise` if they define a right turn,
/// `Collinear` if they are collinear.
pub fn orient_2d(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    evaluate(&Orientation2, [&a.x, &a.y, &b.x, &b.y, &c.x, &c.y])
}

/// Calculates the orientation of points `a`, `b`, `c`, `d` in a space.
/// `CounterClockwise` if `d` lies on the side of plane `a`, `b`, `c`
/// from which `a`→`b`→`c` looks counterclockwise,
/// `Collinear` if the four points are coplanar.
#[rustfmt::skip]
pub fn orient_3d(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> Orientation {
    evaluate(&Orientation3, [
        &a.x, &a.y, &a.z,
        &b.x, &b.y, &b.z,
        &c.x, &c.y, &c.z,
        &d.x, &d.y, &d.z,
    ])
}

/// Side of `d` with respect to the circle through `a`, `b`, `c`.
/// `OnPositiveSide` is inside when `a`, `b`, `c` turn left.
#[rustfmt::skip]
pub fn in_circle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> OrientedSide {
    evaluate(&SideOfOrientedCircle2, [
        &a.x, &a.y, &b.x, &b.y, &c.x, &c.y, &d.x, &d.y,
    ])
}

/// Side of `t` with respect to the smallest circle orthogonal to `p` and `q`.
/// `OnPositiveSide` is inside.
#[rustfmt::skip]
pub fn in_smallest_orthogonal_circle(
    p: &WeightedPoint2,
    q: &WeightedPoint2,
    t: &WeightedPoint2,
) -> OrientedSide {
    evaluate(&InSmallestOrthogonalCircle2, [
        &p.point.x, &p.point.y, &p.weight,
        &q.point.x, &q.point.y, &q.weight,
        &t.point.x, &t.point.y, &t.weight,
    ])
}

pub fn compare_x(p: &Point2, q: &Point2) -> Ordering {
    evaluate(&CompareX2, [&p.x, &q.x])
}

/// Lexicographic order, `x` first.
pub fn compare_xy(p: &Point2, q: &Point2) -> Ordering {
    evaluate(&CompareXY2, [&p.x, &p.y, &q.x, &q.y])
}

/// `Less` if `q` is closer to `p` than `r` is.
pub fn compare_distance(p: &Point2, q: &Point2, r: &Point2) -> Ordering {
    evaluate(&CompareDistance2, [&p.x, &p.y, &q.x, &q.y, &r.x, &r.y])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::filter::{reset_stats, stats};
    use crate::rounding::{self, RoundingMode};
    use crate::sign::Sign;
    use rand::distributions::{Distribution, Uniform};
    use rand::Rng;
    use rand_pcg::Pcg64;
    use rug::Rational;

    type Vec2 = Vector2<f64>;
    type Vec3 = Vector3<f64>;

    const PCG_STATE: u128 = 0xcafef00dd15ea5e5;
    const PCG_STREAM: u128 = 0xa02bdbf7bb3c0a7ac28fa16a64abf96;

    fn r(x: f64) -> Rational {
        Rational::from_f64(x).unwrap()
    }

    fn lift2(v: Vec2) -> Point2 {
        v.map(|x| Filtered::new(x).unwrap())
    }

    fn lift3(v: Vec3) -> Point3 {
        v.map(|x| Filtered::new(x).unwrap())
    }

    fn orient_2d_exact(a: Vec2, b: Vec2, c: Vec2) -> Orientation {
        let ax = r(a.x) - r(c.x);
        let ay = r(a.y) - r(c.y);
        let bx = r(b.x) - r(c.x);
        let by = r(b.y) - r(c.y);
        let det = ax * by - ay * bx;
        Sign::of_ordering(det.cmp0()).into()
    }

    fn check_orient_2d(a: Vec2, b: Vec2, c: Vec2) {
        let filtered = orient_2d(&lift2(a), &lift2(b), &lift2(c));
        let exact = orient_2d_exact(a, b, c);
        assert_eq!(filtered, exact, "({}, {}, {}) gave wrong result", a, b, c);
    }

    #[test]
    fn test_orient_2d_uniform_random() {
        // Deterministic, portable RNG
        let mut rng = Pcg64::new(PCG_STATE, PCG_STREAM);
        let dist = Uniform::new(-10.0, 10.0);

        reset_stats();
        for _ in 0..2000 {
            let vals = dist.sample_iter(&mut rng).take(6).collect::<Vec<_>>();
            let a = Vec2::new(vals[0], vals[1]);
            let b = Vec2::new(vals[2], vals[3]);
            let c = Vec2::new(vals[4], vals[5]);
            check_orient_2d(a, b, c);
        }
        // Random triangles are well conditioned
        assert!(stats().fast > stats().exact * 10);
    }

    #[test]
    fn test_orient_2d_geometric_random() {
        let mut rng = Pcg64::new(PCG_STATE, PCG_STREAM);
        let mut rng2 = Pcg64::new(PCG_STATE, PCG_STREAM);
        let dist = Uniform::new(-30.0, 30.0);

        for _ in 0..2000 {
            let vals = dist.sample_iter(&mut rng).take(6)
                .map(|x: f64| if rng2.gen() { -1.0 } else { 1.0 } * x.exp2())
                .collect::<Vec<_>>();
            let a = Vec2::new(vals[0], vals[1]);
            let b = Vec2::new(vals[2], vals[3]);
            let c = Vec2::new(vals[4], vals[5]);
            check_orient_2d(a, b, c);
        }
    }

    #[test]
    fn test_orient_2d_near_collinear() {
        let mut rng = Pcg64::new(PCG_STATE, PCG_STREAM);
        let dist = Uniform::new(-1.0, 1.0);
        let fac_dist = Uniform::new(-1.0, 2.0);

        for _ in 0..2000 {
            let vals = dist.sample_iter(&mut rng).take(4).collect::<Vec<_>>();
            let a = Vec2::new(vals[0], vals[1]);
            let b = Vec2::new(vals[2], vals[3]);

            let fac = fac_dist.sample(&mut rng);
            let c = a + (b - a) * fac;

            check_orient_2d(a, b, c);
        }
    }

    #[test]
    fn test_orient_2d_collinear() {
        let mut rng = Pcg64::new(PCG_STATE, PCG_STREAM);
        let dist = Uniform::new_inclusive(-4096, 4096);
        let fac_dist = Uniform::new_inclusive(-4095, 4096);

        for _ in 0..2000 {
            let vals = dist.sample_iter(&mut rng).take(4)
                .map(|x| (x as f64) / 4096.0).collect::<Vec<_>>();
            let a = Vec2::new(vals[0], vals[1]);
            let b = Vec2::new(vals[2], vals[3]);

            let fac = fac_dist.sample(&mut rng);
            let c = a + (b - a) * (fac as f64) / 16.0;

            check_orient_2d(a, b, c);
            assert_eq!(orient_2d_exact(a, b, c), Orientation::Collinear);
        }
    }

    #[test]
    fn test_orient_2d_collinear_falls_back() {
        let a = point2(0.1, 0.1).unwrap();
        let b = point2(0.2, 0.2).unwrap();
        let c = point2(0.3, 0.3).unwrap();
        let _guard = rounding::Protector::new(RoundingMode::TowardZero);
        reset_stats();
        assert_eq!(orient_2d(&a, &b, &c), Orientation::Collinear);
        assert_eq!(stats().exact, 1);
        assert_eq!(rounding::get(), RoundingMode::TowardZero);
    }

    fn orient_3d_exact(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Orientation {
        let [bx, by, bz] = [0, 1, 2].map(|i| r(b[i]) - r(a[i]));
        let [cx, cy, cz] = [0, 1, 2].map(|i| r(c[i]) - r(a[i]));
        let [dx, dy, dz] = [0, 1, 2].map(|i| r(d[i]) - r(a[i]));
        let det = bx.clone() * (cy.clone() * dz.clone() - cz.clone() * dy.clone())
            - cx.clone() * (by.clone() * dz - bz.clone() * dy)
            + dx * (by * cz - bz * cy);
        Sign::of_ordering(det.cmp0()).into()
    }

    fn check_orient_3d(a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
        let filtered = orient_3d(&lift3(a), &lift3(b), &lift3(c), &lift3(d));
        let exact = orient_3d_exact(a, b, c, d);
        assert_eq!(filtered, exact, "({}, {}, {}, {}) gave wrong result", a, b, c, d);
    }

    #[test]
    fn test_orient_3d_uniform_random() {
        let mut rng = Pcg64::new(PCG_STATE, PCG_STREAM);
        let dist = Uniform::new(-10.0, 10.0);

        for _ in 0..500 {
            let vals = dist.sample_iter(&mut rng).take(12).collect::<Vec<_>>();
            let a = Vec3::new(vals[0], vals[1], vals[2]);
            let b = Vec3::new(vals[3], vals[4], vals[5]);
            let c = Vec3::new(vals[6], vals[7], vals[8]);
            let d = Vec3::new(vals[9], vals[10], vals[11]);
            check_orient_3d(a, b, c, d);
        }
    }

    #[test]
    fn test_orient_3d_near_coplanar() {
        let mut rng = Pcg64::new(PCG_STATE, PCG_STREAM);
        let dist = Uniform::new(-1.0, 1.0);
        let fac_dist = Uniform::new(-1.0, 2.0);

        for _ in 0..500 {
            let vals = dist.sample_iter(&mut rng).take(9).collect::<Vec<_>>();
            let a = Vec3::new(vals[0], vals[1], vals[2]);
            let b = Vec3::new(vals[3], vals[4], vals[5]);
            let c = Vec3::new(vals[6], vals[7], vals[8]);

            let fac = fac_dist.sample(&mut rng);
            let fac2 = fac_dist.sample(&mut rng);
            let d = c + (a + (b - a) * fac - c) * fac2;

            check_orient_3d(a, b, c, d);
        }
    }

    #[test]
    fn test_orient_3d_coplanar() {
        let mut rng = Pcg64::new(PCG_STATE, PCG_STREAM);
        let dist = Uniform::new_inclusive(-4096, 4096);
        let fac_dist = Uniform::new_inclusive(-4095, 4096);

        for _ in 0..500 {
            let vals = dist.sample_iter(&mut rng).take(9)
                .map(|x| (x as f64) / 4096.0).collect::<Vec<_>>();
            let a = Vec3::new(vals[0], vals[1], vals[2]);
            let b = Vec3::new(vals[3], vals[4], vals[5]);
            let c = Vec3::new(vals[6], vals[7], vals[8]);

            let fac = fac_dist.sample(&mut rng) as f64 / 16.0;
            let fac2 = fac_dist.sample(&mut rng) as f64 / 16.0;
            let d = c + (a + (b - a) * fac - c) * fac2;

            check_orient_3d(a, b, c, d);
        }
    }

    #[test]
    fn test_in_circle_cocircular() {
        // Points on the circle x² + y² = 25
        let pts = [(5.0, 0.0), (3.0, 4.0), (-4.0, 3.0), (0.0, -5.0), (-3.0, -4.0)]
            .map(|(x, y)| point2(x, y).unwrap());
        assert_eq!(in_circle(&pts[0], &pts[1], &pts[2], &pts[3]), OrientedSide::OnOrientedBoundary);
        assert_eq!(in_circle(&pts[0], &pts[1], &pts[2], &pts[4]), OrientedSide::OnOrientedBoundary);
        let center = point2(0.0, 0.0).unwrap();
        assert_eq!(in_circle(&pts[0], &pts[1], &pts[2], &center), OrientedSide::OnPositiveSide);
        assert_eq!(in_circle(&pts[0], &pts[2], &pts[1], &center), OrientedSide::OnNegativeSide);
    }

    #[test]
    fn test_in_smallest_orthogonal_circle_clear_inside() {
        let p = WeightedPoint2::new(-3.0, 1.0, 0.5).unwrap();
        let q = WeightedPoint2::new(5.0, 1.0, 0.25).unwrap();
        let t = WeightedPoint2::new(1.0, 1.5, 0.0).unwrap();
        reset_stats();
        assert_eq!(in_smallest_orthogonal_circle(&p, &q, &t), OrientedSide::OnPositiveSide);
        assert_eq!(stats().fast, 1);

        let far = WeightedPoint2::new(1.0, 50.0, 0.0).unwrap();
        assert_eq!(in_smallest_orthogonal_circle(&p, &q, &far), OrientedSide::OnNegativeSide);
        assert_eq!(stats().exact, 0);
    }

    #[test]
    fn test_large_coordinates() {
        // At 1e15 the coordinate spacing is 0.125
        let a = point2(1e15, 1e15).unwrap();
        let b = point2(1e15 + 2.0, 1e15 + 2.0).unwrap();
        let c = point2(1e15 + 4.0, 1e15 + 4.125).unwrap();
        assert_eq!(orient_2d(&a, &b, &c), Orientation::CounterClockwise);
        let c = point2(-1e15, -1e15).unwrap();
        assert_eq!(orient_2d(&a, &b, &c), Orientation::Collinear);

        // Squared coordinates overflow
        let huge = point2(1e200, 1e200).unwrap();
        let origin = point2(0.0, 0.0).unwrap();
        let mirrored = point2(-1e200, -1e200).unwrap();
        assert_eq!(compare_distance(&origin, &huge, &mirrored), Ordering::Equal);
    }

    #[test]
    fn test_equal_points_compare_equal() {
        let p = point2(0.1, -7.25).unwrap();
        let q = point2(0.1, -7.25).unwrap();
        reset_stats();
        assert_eq!(compare_xy(&p, &q), Ordering::Equal);
        assert_eq!(compare_x(&p, &q), Ordering::Equal);
        assert_eq!(stats().fast, 2);
        assert_eq!(compare_xy(&p, &point2(0.1, 8.0).unwrap()), Ordering::Less);
    }

    #[test]
    fn test_non_finite_point_rejected() {
        assert!(point2(f64::NAN, 0.0).is_err());
        assert!(point3(0.0, f64::INFINITY, 0.0).is_err());
        assert!(WeightedPoint2::new(0.0, 0.0, f64::NEG_INFINITY).is_err());
    }
}
