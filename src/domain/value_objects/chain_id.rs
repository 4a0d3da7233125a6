//! # Chain Identifier
//!
//! Numeric EVM chain identifiers with names for the networks the exchange ships with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// EVM chain identifier.
///
/// Any `u64` is representable; whether a chain is usable depends on the
/// explorer registry, not on this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    /// Ethereum mainnet (chain ID 1).
    pub const ETHEREUM: Self = Self(1);
    /// Görli testnet (chain ID 5).
    pub const GOERLI: Self = Self(5);
    /// BNB Smart Chain (chain ID 56).
    pub const BSC: Self = Self(56);
    /// Polygon mainnet (chain ID 137).
    pub const POLYGON: Self = Self(137);
    /// Sepolia testnet (chain ID 11155111).
    pub const SEPOLIA: Self = Self(11_155_111);

    /// Creates a chain identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric chain ID.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns the network name for built-in chains.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        match self.0 {
            1 => Some("ethereum"),
            5 => Some("goerli"),
            56 => Some("bsc"),
            137 => Some("polygon"),
            11_155_111 => Some("sepolia"),
            _ => None,
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
