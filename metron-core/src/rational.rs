//! Exact rational numbers using dashu
//!
//! Uses dashu-ratio (RBig) so that unit scale factors spanning 10^-24 to
//! 10^24 stay lossless through multiplication and division. Every finite
//! f64 converts to a rational exactly; the reverse cast rounds once.

use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use thiserror::Error;

/// Error type for rational operations
#[derive(Debug, Clone, Error)]
pub enum RationalError {
    #[error("Non-finite value: {0}")]
    NonFinite(f64),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Exact arbitrary precision rational number
///
/// Built on dashu-ratio's RBig, kept in canonical (reduced) form.
/// All operations return Results or new Rationals - never panic,
/// except `from_ratio` on a zero denominator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rational {
    inner: RBig,
}

impl Rational {
    /// Exact zero
    pub const ZERO: Self = Self { inner: RBig::ZERO };

    /// Exact one
    pub const ONE: Self = Self { inner: RBig::ONE };

    // ========== Construction ==========

    /// Create from i64
    pub fn from_i64(n: i64) -> Self {
        Self {
            inner: RBig::from_parts(IBig::from(n), UBig::ONE),
        }
    }

    /// Create from a ratio of integers (exact, reduced)
    ///
    /// # Panics
    /// Panics if `den` is zero.
    pub fn from_ratio(num: i64, den: i64) -> Self {
        assert!(den != 0, "rational with zero denominator");
        let n = IBig::from(num);
        let n = if den < 0 { -n } else { n };
        Self {
            inner: RBig::from_parts(n, UBig::from(den.unsigned_abs())),
        }
    }

    /// Create a power of ten, 10^exp (exact for negative exponents too)
    pub fn pow10(exp: i32) -> Self {
        let e = exp.unsigned_abs() as usize;
        if exp >= 0 {
            Self {
                inner: RBig::from_parts(IBig::from(10).pow(e), UBig::ONE),
            }
        } else {
            Self {
                inner: RBig::from_parts(IBig::ONE, UBig::from(10u8).pow(e)),
            }
        }
    }

    /// Create from f64, exactly (every finite double is a rational)
    pub fn from_f64(f: f64) -> Result<Self, RationalError> {
        RBig::try_from(f)
            .map(|inner| Self { inner })
            .map_err(|_| RationalError::NonFinite(f))
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner == RBig::ZERO
    }

    /// Check if strictly positive
    pub fn is_positive(&self) -> bool {
        self.inner > RBig::ZERO
    }

    // ========== Arithmetic ==========

    /// Addition (exact)
    pub fn add(&self, other: &Self) -> Self {
        Self {
            inner: &self.inner + &other.inner,
        }
    }

    /// Subtraction (exact)
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            inner: &self.inner - &other.inner,
        }
    }

    /// Multiplication (exact)
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            inner: &self.inner * &other.inner,
        }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, RationalError> {
        if other.is_zero() {
            Err(RationalError::DivisionByZero)
        } else {
            Ok(Self {
                inner: &self.inner / &other.inner,
            })
        }
    }

    // ========== Conversion ==========

    /// Convert to f64 with correct rounding (single rounding step)
    ///
    /// Values beyond the f64 range become signed infinity.
    pub fn to_f64(&self) -> f64 {
        self.inner.to_f64().value()
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner
            .partial_cmp(&other.inner)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}
