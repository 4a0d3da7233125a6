//! # Checked Arithmetic
//!
//! Basis-point scaling over 256-bit token amounts.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`mul_div_floor`] - `floor(value * numerator / denominator)` with a 512-bit intermediate
//!
//! # Examples
//!
//! ```
//! use ladder_utils::domain::value_objects::arithmetic::{mul_div_floor, BASIS_POINTS};
//! use ethers::types::U256;
//!
//! let scaled = mul_div_floor(U256::from(1_000u64), 9_950, BASIS_POINTS).unwrap();
//! assert_eq!(scaled, U256::from(995u64));
//! ```

use ethers::types::{U256, U512};
use thiserror::Error;

/// Number of basis points in one whole (100%).
pub const BASIS_POINTS: u64 = 10_000;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Computes `floor(value * numerator / denominator)`.
///
/// The product is formed in 512 bits, so only a quotient that does not fit
/// back into 256 bits overflows.
///
/// # Errors
///
/// - `ArithmeticError::DivisionByZero` if `denominator` is zero
/// - `ArithmeticError::Overflow` if the quotient exceeds `U256::MAX`
#[inline]
#[must_use = "this returns the result of the operation, without modifying the original"]
pub fn mul_div_floor(value: U256, numerator: u64, denominator: u64) -> ArithmeticResult<U256> {
    if denominator == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }

    let product: U512 = value.full_mul(U256::from(numerator));
    let quotient = product / U512::from(denominator);
    U256::try_from(quotient).map_err(|_| ArithmeticError::Overflow)
}
