//! # Percent
//!
//! Exact rational percentages for display.
//!
//! # Examples
//!
//! ```
//! use ladder_utils::domain::value_objects::percent::Percent;
//!
//! let tolerance = Percent::from_basis_points(50);
//! assert_eq!(tolerance.to_string(), "0.5%");
//! ```

use super::arithmetic::{ArithmeticError, ArithmeticResult, BASIS_POINTS};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A percentage held as an exact fraction of one.
///
/// `Percent::new(1, 4)` is 25%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Percent {
    numerator: u64,
    denominator: u64,
}

impl Percent {
    /// Creates a percentage from a fraction of one.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if `denominator` is zero.
    pub const fn new(numerator: u64, denominator: u64) -> ArithmeticResult<Self> {
        if denominator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Creates a percentage from basis points (`bps / 10000`).
    #[must_use]
    pub const fn from_basis_points(bps: u32) -> Self {
        Self {
            numerator: bps as u64,
            denominator: BASIS_POINTS,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns the value as a percentage, e.g. `0.5` for 50 basis points.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the numerator does not fit the
    /// decimal mantissa once scaled by 100.
    pub fn to_decimal(&self) -> ArithmeticResult<Decimal> {
        let scaled = Decimal::from(self.numerator)
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(ArithmeticError::Overflow)?;
        scaled
            .checked_div(Decimal::from(self.denominator))
            .ok_or(ArithmeticError::DivisionByZero)
    }

    /// Formats the percentage with a fixed number of decimal places, without a `%` sign.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Percent::to_decimal`].
    pub fn to_fixed(&self, decimal_places: u32) -> ArithmeticResult<String> {
        let value = self.to_decimal()?.round_dp(decimal_places);
        Ok(format!("{:.*}", decimal_places as usize, value))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Ok(value) => write!(f, "{}%", value.normalize()),
            Err(_) => write!(f, "{}/{}", self.numerator, self.denominator),
        }
    }
}
