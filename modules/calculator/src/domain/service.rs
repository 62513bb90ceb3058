//! Domain service for calculator
//!
//! Every operation is a pure function of its operands. Trigonometric inputs
//! are in degrees, inverse trigonometric outputs are in degrees.
//!
//! Operands that no rule guards (NaN, infinities, `asin`/`acos` outside
//! `[-1, 1]`) go straight to the `f64` primitive and its result is returned
//! unchanged.

use tracing::debug;

use super::error::DomainError;

/// Stateless domain service shared by all REST handlers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Service;

impl Service {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// `InvalidArgument` when `b` is zero (either sign).
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        debug!(a, b, "performing division");
        if b == 0.0 {
            return Err(DomainError::division_by_zero());
        }
        Ok(a / b)
    }

    #[must_use]
    pub fn power(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing exponentiation");
        a.powf(b)
    }

    /// Principal square root.
    ///
    /// # Errors
    /// `InvalidArgument` when `a < 0`.
    pub fn sqrt(&self, a: f64) -> Result<f64, DomainError> {
        debug!(a, "computing square root");
        if a < 0.0 {
            return Err(DomainError::negative_square_root());
        }
        Ok(a.sqrt())
    }

    /// Natural logarithm.
    ///
    /// # Errors
    /// `InvalidArgument` when `a <= 0`.
    pub fn log(&self, a: f64) -> Result<f64, DomainError> {
        debug!(a, "computing natural logarithm");
        if a <= 0.0 {
            return Err(DomainError::non_positive_logarithm());
        }
        Ok(a.ln())
    }

    /// Base-10 logarithm.
    ///
    /// # Errors
    /// `InvalidArgument` when `a <= 0`.
    pub fn log10(&self, a: f64) -> Result<f64, DomainError> {
        debug!(a, "computing base-10 logarithm");
        if a <= 0.0 {
            return Err(DomainError::non_positive_logarithm());
        }
        Ok(a.log10())
    }

    /// Product of `2..=n`, 1 for `n` in {0, 1}.
    ///
    /// # Errors
    /// `InvalidArgument` when `n < 0` or the product does not fit in `i64` (`n > 20`).
    pub fn factorial(&self, n: i64) -> Result<i64, DomainError> {
        debug!(n, "computing factorial");
        if n < 0 {
            return Err(DomainError::negative_factorial());
        }
        (2..=n)
            .try_fold(1_i64, i64::checked_mul)
            .ok_or_else(|| DomainError::factorial_overflow(n))
    }

    #[must_use]
    pub fn sin(&self, degrees: f64) -> f64 {
        debug!(degrees, "computing sine");
        degrees.to_radians().sin()
    }

    #[must_use]
    pub fn cos(&self, degrees: f64) -> f64 {
        debug!(degrees, "computing cosine");
        degrees.to_radians().cos()
    }

    #[must_use]
    pub fn tan(&self, degrees: f64) -> f64 {
        debug!(degrees, "computing tangent");
        degrees.to_radians().tan()
    }

    #[must_use]
    pub fn asin(&self, a: f64) -> f64 {
        debug!(a, "computing arcsine");
        a.asin().to_degrees()
    }

    #[must_use]
    pub fn acos(&self, a: f64) -> f64 {
        debug!(a, "computing arccosine");
        a.acos().to_degrees()
    }

    #[must_use]
    pub fn atan(&self, a: f64) -> f64 {
        debug!(a, "computing arctangent");
        a.atan().to_degrees()
    }
}
