//! Results of geometric predicates.

use std::cmp::Ordering;
use std::ops::Neg;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn of_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }

    pub fn to_ordering(self) -> Ordering {
        match self {
            Sign::Negative => Ordering::Less,
            Sign::Zero => Ordering::Equal,
            Sign::Positive => Ordering::Greater,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// Turn direction of an ordered point sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl From<Sign> for Orientation {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => Orientation::Clockwise,
            Sign::Zero => Orientation::Collinear,
            Sign::Positive => Orientation::CounterClockwise,
        }
    }
}

/// Side of an oriented curve or surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrientedSide {
    OnNegativeSide,
    OnOrientedBoundary,
    OnPositiveSide,
}

impl From<Sign> for OrientedSide {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => OrientedSide::OnNegativeSide,
            Sign::Zero => OrientedSide::OnOrientedBoundary,
            Sign::Positive => OrientedSide::OnPositiveSide,
        }
    }
}

/// Side of a closed curve or surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundedSide {
    OnUnboundedSide,
    OnBoundary,
    OnBoundedSide,
}

impl OrientedSide {
    /// Bounded side for a positively oriented boundary.
    pub fn bounded(self) -> BoundedSide {
        match self {
            OrientedSide::OnNegativeSide => BoundedSide::OnUnboundedSide,
            OrientedSide::OnOrientedBoundary => BoundedSide::OnBoundary,
            OrientedSide::OnPositiveSide => BoundedSide::OnBoundedSide,
        }
    }
}
