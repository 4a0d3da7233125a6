//! # Ladder Utils
//!
//! Address, explorer-link, slippage and gas helpers for the Ladder NFT
//! exchange front end.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): Addresses, chain ids, percentages and checked arithmetic
//! - **Application Layer** (`application`): Slippage bounds, NFT import checks, testnet campaign
//! - **Infrastructure Layer** (`infrastructure`): Explorer links, gas margin, wallet port
//! - **API Layer** (`api`): Display formatting for the UI
//!
//! Cross-cutting concerns live in [`config`] and [`telemetry`].
//!
//! ## Example
//!
//! ```
//! use ethers::types::U256;
//! use ladder_utils::{calculate_gas_margin, calculate_slippage_amount, is_address};
//!
//! let addr = is_address("0x314195c69d8f0236939a31f64cb367764672ca0f").unwrap();
//! assert_eq!(addr.shortened(4), "0x3141...CA0f");
//!
//! let bound = calculate_slippage_amount(U256::from(1_000u64), 50).unwrap();
//! assert_eq!(bound.into_tuple(), (U256::from(995u64), U256::from(1_005u64)));
//!
//! assert_eq!(calculate_gas_margin(U256::from(100_000u64)), U256::from(110_000u64));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use api::display::{escape_regex, format_compact, format_timestamp};
pub use application::services::slippage::{basis_points_to_percent, calculate_slippage_amount};
pub use domain::value_objects::{is_address, shorten_address, validate_contract_address};
pub use infrastructure::blockchain::{calculate_gas_margin, get_etherscan_link};
