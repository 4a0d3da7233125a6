//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`Address`]: Checksummed 20-byte address
//! - [`ChainId`]: EVM chain identifier
//!
//! ## Numeric Types
//!
//! - [`AmountBound`]: Inclusive slippage bounds around a raw amount
//! - [`Percent`]: Exact rational percentage
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`mul_div_floor`]: Wide multiply-then-divide
//!
//! ## Testnet Campaign
//!
//! - [`ClaimState`], [`CampaignWindow`], [`CampaignPhase`]

pub mod address;
pub mod amount_bound;
pub mod arithmetic;
pub mod chain_id;
pub mod claim;
pub mod percent;

pub use address::{
    is_address, shorten_address, validate_contract_address, Address, AddressParseError,
    DEFAULT_SHORTEN_CHARS,
};
pub use amount_bound::AmountBound;
pub use arithmetic::{mul_div_floor, ArithmeticError, ArithmeticResult, BASIS_POINTS};
pub use chain_id::ChainId;
pub use claim::{CampaignPhase, CampaignWindow, ClaimState};
pub use percent::Percent;
