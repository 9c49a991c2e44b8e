//! Triangular fuzzy number value object and its arithmetic.
//!
//! Every operation is total: a division by zero or by a non-finite value
//! yields a zero component, and any NaN or infinite component produced by an
//! operation is replaced by zero before the value is handed back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

use super::Defuzzification;

/// A triangular fuzzy number `(lower, mode, upper)`.
///
/// Operators assume `lower <= mode <= upper` but do not enforce it; fuzzy
/// subtraction routinely produces a negative lower bound that is only clamped
/// where the pipeline asks for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangularFuzzyNumber {
    pub lower: f64,
    pub mode: f64,
    pub upper: f64,
}

/// Division that returns 0 when the divisor is zero or not finite.
pub fn safe_div(numerator: f64, divisor: f64) -> f64 {
    if divisor == 0.0 || !divisor.is_finite() {
        return 0.0;
    }
    sanitize(numerator / divisor)
}

/// Replaces NaN and infinities with 0.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl TriangularFuzzyNumber {
    /// The zero fuzzy number `(0, 0, 0)`.
    pub const ZERO: Self = Self {
        lower: 0.0,
        mode: 0.0,
        upper: 0.0,
    };

    /// Creates a fuzzy number from its three components, sanitizing each.
    pub fn new(lower: f64, mode: f64, upper: f64) -> Self {
        Self {
            lower: sanitize(lower),
            mode: sanitize(mode),
            upper: sanitize(upper),
        }
    }

    /// A crisp value expressed as a degenerate triangle.
    pub fn crisp(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the components as `[lower, mode, upper]`.
    pub fn components(&self) -> [f64; 3] {
        [self.lower, self.mode, self.upper]
    }

    /// Componentwise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.lower + other.lower,
            self.mode + other.mode,
            self.upper + other.upper,
        )
    }

    /// Fuzzy distance subtraction: `(a.l - b.u, a.m - b.m, a.u - b.l)`.
    ///
    /// Not componentwise. The result spans the pessimistic spread of both
    /// operands.
    pub fn subtract(&self, other: &Self) -> Self {
        Self::new(
            self.lower - other.upper,
            self.mode - other.mode,
            self.upper - other.lower,
        )
    }

    /// Multiplies every component by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.lower * factor, self.mode * factor, self.upper * factor)
    }

    /// Divides every component by `divisor`; zero when `divisor` is 0 or not finite.
    pub fn scalar_div(&self, divisor: f64) -> Self {
        if divisor == 0.0 || !divisor.is_finite() {
            return Self::ZERO;
        }
        Self::new(
            self.lower / divisor,
            self.mode / divisor,
            self.upper / divisor,
        )
    }

    /// Elementwise product `(a.l * b.l, a.m * b.m, a.u * b.u)`.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.lower * other.lower,
            self.mode * other.mode,
            self.upper * other.upper,
        )
    }

    /// Approximate fuzzy division `(a.l / b.u, a.m / b.m, a.u / b.l)`.
    ///
    /// Each component is 0 when its divisor is 0 or not finite.
    pub fn fuzzy_div(&self, other: &Self) -> Self {
        Self::new(
            safe_div(self.lower, other.upper),
            safe_div(self.mode, other.mode),
            safe_div(self.upper, other.lower),
        )
    }

    /// Componentwise minimum. Used for extrema, not arithmetic.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            self.lower.min(other.lower),
            self.mode.min(other.mode),
            self.upper.min(other.upper),
        )
    }

    /// Componentwise maximum. Used for extrema, not arithmetic.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            self.lower.max(other.lower),
            self.mode.max(other.mode),
            self.upper.max(other.upper),
        )
    }

    /// Clamps every component to `max(0, value)`.
    pub fn clamp_non_negative(&self) -> Self {
        Self::new(self.lower.max(0.0), self.mode.max(0.0), self.upper.max(0.0))
    }

    /// Reduces the number to a scalar with the given rule.
    pub fn defuzzify(&self, method: Defuzzification) -> f64 {
        method.apply(self)
    }

    /// Returns true if every component is finite and non-negative.
    pub fn is_non_negative(&self) -> bool {
        self.components().iter().all(|c| c.is_finite() && *c >= 0.0)
    }

    /// Returns true if each component of `self` is >= the matching component of `other`.
    pub fn dominates(&self, other: &Self) -> bool {
        self.lower >= other.lower && self.mode >= other.mode && self.upper >= other.upper
    }
}

impl Sum for TriangularFuzzyNumber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc.add(&x))
    }
}

impl From<[f64; 3]> for TriangularFuzzyNumber {
    fn from(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for TriangularFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}, {:.3}]", self.lower, self.mode, self.upper)
    }
}
