//! # Amount Bound
//!
//! Inclusive `[lower, upper]` range around a raw token amount.

use ethers::types::U256;
use serde::Serialize;
use std::fmt;

/// Inclusive bounds around a raw amount.
///
/// Constructed by the slippage calculator, which guarantees `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AmountBound {
    lower: U256,
    upper: U256,
}

impl AmountBound {
    pub(crate) const fn new(lower: U256, upper: U256) -> Self {
        Self { lower, upper }
    }

    /// Minimum acceptable amount.
    #[must_use]
    pub const fn lower(&self) -> U256 {
        self.lower
    }

    /// Maximum acceptable amount.
    #[must_use]
    pub const fn upper(&self) -> U256 {
        self.upper
    }

    /// Returns whether `amount` lies within the bounds (inclusive).
    #[must_use]
    pub fn contains(&self, amount: U256) -> bool {
        self.lower <= amount && amount <= self.upper
    }

    /// Returns `upper - lower`, the spread the tolerance allows.
    #[must_use]
    pub fn width(&self) -> U256 {
        self.upper.saturating_sub(self.lower)
    }

    /// Returns the bounds as a `(lower, upper)` tuple.
    #[must_use]
    pub const fn into_tuple(self) -> (U256, U256) {
        (self.lower, self.upper)
    }
}

impl fmt::Display for AmountBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let bound = AmountBound::new(U256::from(95u64), U256::from(105u64));
        assert!(bound.contains(U256::from(95u64)));
        assert!(bound.contains(U256::from(105u64)));
        assert!(!bound.contains(U256::from(94u64)));
        assert!(!bound.contains(U256::from(106u64)));
    }

    #[test]
    fn width_and_display() {
        let bound = AmountBound::new(U256::from(95u64), U256::from(105u64));
        assert_eq!(bound.width(), U256::from(10u64));
        assert_eq!(bound.to_string(), "[95, 105]");
        assert_eq!(bound.into_tuple(), (U256::from(95u64), U256::from(105u64)));
    }

    #[test]
    fn degenerate_bound_has_zero_width() {
        let bound = AmountBound::new(U256::from(7u64), U256::from(7u64));
        assert_eq!(bound.width(), U256::zero());
    }
}
