//! # Slippage Bounds
//!
//! Minimum and maximum acceptable amounts for a trade given a slippage
//! tolerance in basis points.
//!
//! ```text
//! lower = floor(value * (10000 - bps) / 10000)
//! upper = floor(value * (10000 + bps) / 10000)
//! ```
//!
//! All arithmetic is integer arithmetic on 256-bit amounts with a 512-bit
//! intermediate, so large token amounts do not drift.
//!
//! # Examples
//!
//! ```
//! use ladder_utils::application::services::slippage::calculate_slippage_amount;
//! use ethers::types::U256;
//!
//! let bound = calculate_slippage_amount(U256::from(1_000u64), 50).unwrap();
//! assert_eq!(bound.lower(), U256::from(995u64));
//! assert_eq!(bound.upper(), U256::from(1_005u64));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{mul_div_floor, BASIS_POINTS};
use crate::domain::value_objects::{AmountBound, Percent};
use ethers::types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest accepted tolerance: 100%.
pub const MAX_SLIPPAGE_BPS: u32 = 10_000;

/// Tolerance used when the user has not chosen one: 0.5%.
pub const DEFAULT_SLIPPAGE_BPS: u32 = 50;

/// Computes the inclusive bounds around `value` for a slippage tolerance.
///
/// # Errors
///
/// - `DomainError::SlippageOutOfRange` if `slippage_bps` exceeds 10000
/// - `DomainError::Arithmetic` if the upper bound does not fit in 256 bits
pub fn calculate_slippage_amount(value: U256, slippage_bps: u32) -> DomainResult<AmountBound> {
    if slippage_bps > MAX_SLIPPAGE_BPS {
        return Err(DomainError::SlippageOutOfRange(slippage_bps));
    }

    let bps = u64::from(slippage_bps);
    let lower = mul_div_floor(value, BASIS_POINTS - bps, BASIS_POINTS)?;
    let upper = mul_div_floor(value, BASIS_POINTS + bps, BASIS_POINTS)?;
    Ok(AmountBound::new(lower, upper))
}

/// Converts basis points to a [`Percent`] for display.
#[must_use]
pub const fn basis_points_to_percent(bps: u32) -> Percent {
    Percent::from_basis_points(bps)
}

/// A validated slippage tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SlippageTolerance(u32);

impl SlippageTolerance {
    /// Creates a tolerance.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlippageOutOfRange` if `bps` exceeds 10000.
    pub fn new(bps: u32) -> DomainResult<Self> {
        if bps > MAX_SLIPPAGE_BPS {
            return Err(DomainError::SlippageOutOfRange(bps));
        }
        Ok(Self(bps))
    }

    /// Returns the tolerance in basis points.
    #[must_use]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the tolerance as a percentage.
    #[must_use]
    pub const fn as_percent(&self) -> Percent {
        basis_points_to_percent(self.0)
    }

    /// Computes the bounds around `value`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if the upper bound overflows.
    pub fn bounds(&self, value: U256) -> DomainResult<AmountBound> {
        calculate_slippage_amount(value, self.0)
    }
}

impl Default for SlippageTolerance {
    fn default() -> Self {
        Self(DEFAULT_SLIPPAGE_BPS)
    }
}

impl TryFrom<u32> for SlippageTolerance {
    type Error = DomainError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        Self::new(bps)
    }
}

impl From<SlippageTolerance> for u32 {
    fn from(tolerance: SlippageTolerance) -> Self {
        tolerance.0
    }
}

impl fmt::Display for SlippageTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_percent())
    }
}
