//! # Property-Based Tests
//!
//! Invariants of the address, slippage and gas helpers over random input.
//!
//! # Test Coverage
//!
//! - Address canonicalization is case-insensitive for checksum-free input
//! - Shortened addresses have a fixed shape
//! - Slippage bounds bracket the amount and are monotonic in the tolerance
//! - Gas margin never lowers an estimate

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use ethers::types::{H160, U256};
use ladder_utils::domain::errors::DomainError;
use ladder_utils::domain::value_objects::{is_address, shorten_address, Address};
use ladder_utils::{calculate_gas_margin, calculate_slippage_amount};
use proptest::prelude::*;

fn arb_address() -> impl Strategy<Value = H160> {
    any::<[u8; 20]>().prop_map(H160::from)
}

fn arb_amount() -> impl Strategy<Value = U256> {
    // Keep the top limb small enough that +100% still fits.
    (any::<[u64; 3]>(), 0u64..(u64::MAX >> 1)).prop_map(|(low, high)| {
        U256([low[0], low[1], low[2], high])
    })
}

// ============================================================================
// Address
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn lower_and_upper_case_canonicalize_alike(raw in arb_address()) {
        let body = ethers::utils::hex::encode(raw.as_bytes());
        let lower = is_address(&format!("0x{body}")).unwrap();
        let upper = is_address(&format!("0x{}", body.to_ascii_uppercase())).unwrap();
        prop_assert_eq!(&lower, &upper);
        prop_assert_eq!(lower, Address::from_h160(raw));
    }

    #[test]
    fn checksummed_form_parses_back(raw in arb_address()) {
        let address = Address::from_h160(raw);
        prop_assert_eq!(is_address(address.as_str()), Some(address.clone()));
    }

    #[test]
    fn shortened_shape(raw in arb_address(), chars in 1usize..=20) {
        let address = Address::from_h160(raw);
        let short = shorten_address(address.as_str(), chars).unwrap();
        prop_assert_eq!(short.len(), 2 + chars * 2 + 3);
        prop_assert!(short.starts_with(&address.as_str()[..2 + chars]));
        prop_assert!(short.ends_with(&address.as_str()[42 - chars..]));
    }

    #[test]
    fn short_garbage_is_never_an_address(input in "[0-9a-zA-Z]{0,39}") {
        prop_assert!(is_address(&input).is_none());
    }
}

// ============================================================================
// Slippage
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn bounds_bracket_the_amount(value in arb_amount(), bps in 0u32..=10_000) {
        let bound = calculate_slippage_amount(value, bps).unwrap();
        prop_assert!(bound.lower() <= value);
        prop_assert!(value <= bound.upper());
        prop_assert!(bound.contains(value));
    }

    #[test]
    fn zero_tolerance_is_exact(value in arb_amount()) {
        let bound = calculate_slippage_amount(value, 0).unwrap();
        prop_assert_eq!(bound.into_tuple(), (value, value));
    }

    #[test]
    fn wider_tolerance_widens_bounds(value in arb_amount(), a in 0u32..=10_000, b in 0u32..=10_000) {
        let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
        let narrow = calculate_slippage_amount(value, narrow).unwrap();
        let wide = calculate_slippage_amount(value, wide).unwrap();
        prop_assert!(wide.lower() <= narrow.lower());
        prop_assert!(narrow.upper() <= wide.upper());
    }

    #[test]
    fn out_of_range_tolerance_fails(value in arb_amount(), bps in 10_001u32..) {
        prop_assert_eq!(
            calculate_slippage_amount(value, bps).unwrap_err(),
            DomainError::SlippageOutOfRange(bps)
        );
    }
}

// ============================================================================
// Gas
// ============================================================================

proptest! {
    #[test]
    fn gas_margin_never_lowers_estimate(estimate in arb_amount()) {
        prop_assert!(calculate_gas_margin(estimate) >= estimate);
    }

    #[test]
    fn gas_margin_is_exact_for_small_estimates(estimate in 0u64..1_000_000_000) {
        let expected = U256::from(estimate) * U256::from(11u64) / U256::from(10u64);
        prop_assert_eq!(calculate_gas_margin(U256::from(estimate)), expected);
    }
}
