//! # Domain Error
//!
//! Contract-violation errors of the address and amount helpers.
//!
//! Routine validation (an address typed into a form) does not use these;
//! see [`is_address`](crate::domain::value_objects::address::is_address).

use crate::domain::value_objects::arithmetic::ArithmeticError;
use thiserror::Error;

/// Error raised when a domain helper receives input its caller should have
/// rejected already.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input is not a valid address.
    #[error("Invalid 'address' parameter '{0}'.")]
    InvalidAddress(String),

    /// Zero address used where a contract is required.
    #[error("the zero address is not a valid contract address")]
    ZeroAddress,

    /// Slippage tolerance outside `0..=10000` basis points.
    #[error("Unexpected slippage value: {0}")]
    SlippageOutOfRange(u32),

    /// Arithmetic failure.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid address error carrying the offending input.
    #[must_use]
    pub fn invalid_address(input: impl Into<String>) -> Self {
        Self::InvalidAddress(input.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
