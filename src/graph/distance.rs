//! Distance values for the shortest-path matrices.
//!
//! `Unreachable` replaces the usual maximum-integer sentinel: the derived
//! ordering puts it above every finite value and addition absorbs it, so the
//! relaxation loop needs no explicit infinity or overflow checks.

use std::{fmt::Display, ops::Add};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance {
    /// A known path of this total weight.
    Finite(i64),
    /// No known path; compares greater than every finite distance.
    Unreachable,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl Add for Distance {
    type Output = Distance;

    /// A sum that overflows `i64` is unreachable rather than wrapped, so it
    /// can never look like an improvement.
    fn add(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a
                .checked_add(b)
                .map_or(Distance::Unreachable, Distance::Finite),
            _ => Distance::Unreachable,
        }
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(weight) => write!(f, "{weight}"),
            Distance::Unreachable => write!(f, "∞"),
        }
    }
}
