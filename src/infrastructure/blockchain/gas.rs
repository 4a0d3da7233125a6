//! # Gas Margin
//!
//! Safety margin applied to gas estimates before a transaction is submitted.
//!
//! Estimates drift between `eth_estimateGas` and inclusion; the margin keeps
//! the limit above the actual usage.

use crate::domain::value_objects::arithmetic::{mul_div_floor, BASIS_POINTS};
use ethers::types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gas margin expressed in basis points on top of the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasMargin {
    /// Margin in basis points (e.g., 1000 for +10%).
    margin_bps: u64,
}

impl GasMargin {
    /// Default margin: +10%.
    pub const DEFAULT_MARGIN_BPS: u64 = 1_000;

    /// Creates a gas margin.
    ///
    /// # Arguments
    ///
    /// * `margin_bps` - Basis points to add to estimates (e.g., 1000 for 10%)
    #[must_use]
    pub const fn new(margin_bps: u64) -> Self {
        Self { margin_bps }
    }

    /// Creates a gas margin with the default +10%.
    #[must_use]
    pub const fn with_default_margin() -> Self {
        Self::new(Self::DEFAULT_MARGIN_BPS)
    }

    /// Returns the margin in basis points.
    #[must_use]
    pub const fn margin_bps(&self) -> u64 {
        self.margin_bps
    }

    /// Applies the margin to a gas estimate.
    ///
    /// Computes `estimate * (10000 + margin_bps) / 10000`, rounding down.
    /// Results beyond `U256::MAX` saturate.
    #[must_use]
    pub fn apply(&self, estimate: U256) -> U256 {
        let factor = BASIS_POINTS.saturating_add(self.margin_bps);
        mul_div_floor(estimate, factor, BASIS_POINTS).unwrap_or(U256::MAX)
    }
}

impl Default for GasMargin {
    fn default() -> Self {
        Self::with_default_margin()
    }
}

impl fmt::Display for GasMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} bps", self.margin_bps)
    }
}

/// Adds 10% to a gas estimate.
#[must_use]
pub fn calculate_gas_margin(estimate: U256) -> U256 {
    GasMargin::default().apply(estimate)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn calculate_gas_margin_adds_ten_percent() {
        assert_eq!(
            calculate_gas_margin(U256::from(100_000u64)),
            U256::from(110_000u64)
        );
        assert_eq!(calculate_gas_margin(U256::from(21_000u64)), U256::from(23_100u64));
    }

    #[test]
    fn rounds_down() {
        // 15 * 1.1 = 16.5
        assert_eq!(calculate_gas_margin(U256::from(15u64)), U256::from(16u64));
        assert_eq!(calculate_gas_margin(U256::zero()), U256::zero());
    }

    #[test]
    fn custom_margin() {
        let margin = GasMargin::new(2_500);
        assert_eq!(margin.apply(U256::from(100_000u64)), U256::from(125_000u64));
        assert_eq!(margin.margin_bps(), 2_500);
    }

    #[test]
    fn zero_margin_is_identity() {
        let margin = GasMargin::new(0);
        assert_eq!(margin.apply(U256::from(12_345u64)), U256::from(12_345u64));
    }

    #[test]
    fn huge_estimate_saturates() {
        assert_eq!(calculate_gas_margin(U256::MAX), U256::MAX);
    }

    #[test]
    fn display_and_default() {
        assert_eq!(GasMargin::default().margin_bps(), 1_000);
        assert_eq!(GasMargin::default().to_string(), "+1000 bps");
    }

    #[test]
    fn serde_roundtrip() {
        let margin = GasMargin::new(1_500);
        let json = serde_json::to_string(&margin).unwrap();
        let back: GasMargin = serde_json::from_str(&json).unwrap();
        assert_eq!(margin, back);
    }
}
