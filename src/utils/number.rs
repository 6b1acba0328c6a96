use crate::constants::{TOL_F32, TOL_F64};
use num_traits::{FromPrimitive, Num, Signed, ToPrimitive};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Tolerant equality for rect fields. `None` picks the per-type default
/// tolerance; integers compare exactly.
pub trait AlmostEqual<Rhs = Self> {
    fn almost_equal(self, other: Rhs, tolerance: Option<Rhs>) -> bool;
}

/// Integer-parse semantics for flat array input: truncation toward zero,
/// never rounding.
pub trait Truncate {
    fn truncated(self) -> Self;
}

pub trait Number:
    Num
    + Copy
    + PartialOrd
    + FromPrimitive
    + ToPrimitive
    + AlmostEqual
    + Truncate
    + Signed
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn min_num(self, other: Self) -> Self;
    fn max_num(self, other: Self) -> Self;
    fn tol() -> Self;
    /// Exact halving, used by the center math.
    fn half(self) -> Self;
    /// The value a missing or unparseable array element collapses to.
    /// Integers have no NaN, so the integer impl collapses to zero.
    fn nan() -> Self;
}

impl AlmostEqual for f64 {
    fn almost_equal(self, other: f64, tolerance: Option<f64>) -> bool {
        let tol = tolerance.unwrap_or(TOL_F64);
        (self - other).abs() < tol
    }
}

impl Truncate for f64 {
    fn truncated(self) -> Self {
        self.trunc()
    }
}

impl Number for f64 {
    #[inline(always)]
    fn min_num(self, other: Self) -> Self {
        self.min(other)
    }
    #[inline(always)]
    fn max_num(self, other: Self) -> Self {
        self.max(other)
    }
    #[inline(always)]
    fn tol() -> Self {
        TOL_F64
    }
    #[inline(always)]
    fn half(self) -> Self {
        0.5 * self
    }
    #[inline(always)]
    fn nan() -> Self {
        f64::NAN
    }
}

impl AlmostEqual for f32 {
    fn almost_equal(self, other: f32, tolerance: Option<f32>) -> bool {
        let tol = tolerance.unwrap_or(TOL_F32);
        (self - other).abs() < tol
    }
}

impl Truncate for f32 {
    fn truncated(self) -> Self {
        self.trunc()
    }
}

impl Number for f32 {
    #[inline(always)]
    fn min_num(self, other: Self) -> Self {
        self.min(other)
    }
    #[inline(always)]
    fn max_num(self, other: Self) -> Self {
        self.max(other)
    }
    #[inline(always)]
    fn tol() -> Self {
        TOL_F32
    }
    #[inline(always)]
    fn half(self) -> Self {
        0.5 * self
    }
    #[inline(always)]
    fn nan() -> Self {
        f32::NAN
    }
}

impl AlmostEqual for i32 {
    fn almost_equal(self, other: i32, _tolerance: Option<i32>) -> bool {
        self == other
    }
}

impl Truncate for i32 {
    fn truncated(self) -> Self {
        self
    }
}

impl Number for i32 {
    #[inline(always)]
    fn min_num(self, other: Self) -> Self {
        self.min(other)
    }
    #[inline(always)]
    fn max_num(self, other: Self) -> Self {
        self.max(other)
    }
    #[inline(always)]
    fn tol() -> Self {
        0
    }
    #[inline(always)]
    fn half(self) -> Self {
        self / 2
    }
    #[inline(always)]
    fn nan() -> Self {
        0
    }
}
