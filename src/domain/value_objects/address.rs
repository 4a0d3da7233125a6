//! # Address
//!
//! Validated, checksummed account and contract addresses.
//!
//! Two entry points with different failure policies:
//!
//! - [`is_address`] is for routine input validation (form fields, query boxes)
//!   and returns `None` for anything that is not an address.
//! - [`shorten_address`] and [`validate_contract_address`] treat an invalid
//!   address as a caller bug and return a [`DomainError`].
//!
//! # Examples
//!
//! ```
//! use ladder_utils::domain::value_objects::address::{is_address, shorten_address};
//!
//! let addr = is_address("0x314195c69d8f0236939a31f64cb367764672ca0f").unwrap();
//! assert_eq!(addr.as_str(), "0x314195C69d8F0236939a31f64cB367764672CA0f");
//!
//! assert_eq!(
//!     shorten_address("0x314195c69d8f0236939a31f64cb367764672ca0f", 4).unwrap(),
//!     "0x3141...CA0f"
//! );
//! assert!(is_address("0x1234").is_none());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use ethers::types::H160;
use ethers::utils::{hex, to_checksum};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of hex digits in an address body.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Length of the canonical `0x`-prefixed form.
pub const ADDRESS_STR_LEN: usize = ADDRESS_HEX_LEN + 2;

/// Default number of hex digits kept on each side by [`shorten_address`].
pub const DEFAULT_SHORTEN_CHARS: usize = 4;

/// Reason an input string was rejected as an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressParseError {
    /// Hex body is not 40 characters long.
    #[error("expected {ADDRESS_HEX_LEN} hex digits, got {0}")]
    InvalidLength(usize),

    /// Hex body contains a non-hex character.
    #[error("address contains non-hex characters")]
    NonHex,

    /// Mixed-case input whose casing does not match the EIP-55 checksum.
    #[error("bad address checksum")]
    BadChecksum,
}

/// A validated 20-byte address.
///
/// Always displays in its EIP-55 checksummed form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    raw: H160,
    checksummed: String,
}

impl Address {
    /// Parses an address from user input.
    ///
    /// Accepts an optional `0x` prefix. All-lowercase and all-uppercase bodies
    /// carry no checksum and are accepted as is; mixed-case bodies must match
    /// the EIP-55 checksum exactly.
    ///
    /// # Errors
    ///
    /// Returns an [`AddressParseError`] describing why the input was rejected.
    pub fn parse(input: &str) -> Result<Self, AddressParseError> {
        let body = input.strip_prefix("0x").unwrap_or(input);

        if body.len() != ADDRESS_HEX_LEN {
            return Err(AddressParseError::InvalidLength(body.len()));
        }
        if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AddressParseError::NonHex);
        }

        let bytes = hex::decode(body).map_err(|_| AddressParseError::NonHex)?;
        let address = Self::from_h160(H160::from_slice(&bytes));

        let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper && address.hex_body() != body {
            return Err(AddressParseError::BadChecksum);
        }

        Ok(address)
    }

    /// Wraps raw address bytes.
    #[must_use]
    pub fn from_h160(raw: H160) -> Self {
        Self {
            raw,
            checksummed: to_checksum(&raw, None),
        }
    }

    /// Returns the all-zero address.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_h160(H160::zero())
    }

    /// Returns whether this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_h160(&self) -> &H160 {
        &self.raw
    }

    /// Returns the checksummed `0x`-prefixed form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.checksummed
    }

    fn hex_body(&self) -> &str {
        self.checksummed.get(2..).unwrap_or_default()
    }

    /// Returns `0x` + the first `chars` digits + `...` + the last `chars` digits.
    ///
    /// `chars` larger than the body is clamped to the body length.
    #[must_use]
    pub fn shortened(&self, chars: usize) -> String {
        let body = self.hex_body();
        let chars = chars.min(body.len());
        let head = body.get(..chars).unwrap_or_default();
        let tail = body.get(body.len() - chars..).unwrap_or_default();
        format!("0x{head}...{tail}")
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Address").field(&self.checksummed).finish()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.checksummed)
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<H160> for Address {
    fn from(raw: H160) -> Self {
        Self::from_h160(raw)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.checksummed)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Returns the checksummed address if `value` is a valid address, otherwise `None`.
#[must_use]
pub fn is_address(value: &str) -> Option<Address> {
    Address::parse(value).ok()
}

/// Shortens the checksummed form of `address` to `0x` + `chars` digits at each end.
///
/// # Errors
///
/// Returns `DomainError::InvalidAddress` carrying the input if it is not a valid address.
pub fn shorten_address(address: &str, chars: usize) -> DomainResult<String> {
    let parsed = is_address(address).ok_or_else(|| DomainError::invalid_address(address))?;
    Ok(parsed.shortened(chars))
}

/// Validates an address that is about to be used as a contract target.
///
/// # Errors
///
/// - `DomainError::InvalidAddress` if the input is not a valid address
/// - `DomainError::ZeroAddress` if it is the zero address
pub fn validate_contract_address(address: &str) -> DomainResult<Address> {
    let parsed = is_address(address).ok_or_else(|| DomainError::invalid_address(address))?;
    if parsed.is_zero() {
        return Err(DomainError::ZeroAddress);
    }
    Ok(parsed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const LOWER: &str = "0x314195c69d8f0236939a31f64cb367764672ca0f";
    const CHECKSUMMED: &str = "0x314195C69d8F0236939a31f64cB367764672CA0f";

    mod parse {
        use super::*;

        #[test]
        fn lowercase_is_checksummed() {
            let addr = is_address(LOWER).unwrap();
            assert_eq!(addr.as_str(), CHECKSUMMED);
        }

        #[test]
        fn uppercase_body_is_accepted() {
            let upper = format!("0x{}", &LOWER[2..].to_ascii_uppercase());
            assert_eq!(is_address(&upper).unwrap().as_str(), CHECKSUMMED);
        }

        #[test]
        fn correct_checksum_is_accepted() {
            assert_eq!(is_address(CHECKSUMMED).unwrap().as_str(), CHECKSUMMED);
        }

        #[test]
        fn missing_prefix_is_accepted() {
            assert_eq!(is_address(&LOWER[2..]).unwrap().as_str(), CHECKSUMMED);
        }

        #[test]
        fn eip55_reference_vector() {
            let addr = is_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
            assert_eq!(addr.as_str(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        }

        #[test]
        fn wrong_checksum_is_rejected() {
            // Flip the case of one checksummed letter.
            let bad = CHECKSUMMED.replacen('C', "c", 1);
            assert_eq!(Address::parse(&bad), Err(AddressParseError::BadChecksum));
            assert!(is_address(&bad).is_none());
        }

        #[test]
        fn wrong_length_is_rejected() {
            assert_eq!(
                Address::parse("0x1234"),
                Err(AddressParseError::InvalidLength(4))
            );
            assert!(is_address(&format!("{LOWER}00")).is_none());
            assert!(is_address("").is_none());
        }

        #[test]
        fn non_hex_is_rejected() {
            let bad = LOWER.replacen('c', "g", 1);
            assert_eq!(Address::parse(&bad), Err(AddressParseError::NonHex));
        }

        #[test]
        fn multibyte_input_is_rejected() {
            assert!(is_address("0xéééééééééééééééééééé").is_none());
        }

        #[test]
        fn from_str_matches_parse() {
            let addr: Address = LOWER.parse().unwrap();
            assert_eq!(addr.to_string(), CHECKSUMMED);
        }
    }

    mod shorten {
        use super::*;

        #[test]
        fn default_chars() {
            let short = shorten_address(LOWER, DEFAULT_SHORTEN_CHARS).unwrap();
            assert_eq!(short, "0x3141...CA0f");
            assert_eq!(short.len(), 13);
        }

        #[test]
        fn custom_chars() {
            assert_eq!(shorten_address(LOWER, 6).unwrap(), "0x314195...72CA0f");
        }

        #[test]
        fn oversized_chars_is_clamped() {
            let short = shorten_address(LOWER, 100).unwrap();
            assert_eq!(short, format!("0x{0}...{0}", &CHECKSUMMED[2..]));
        }

        #[test]
        fn invalid_address_fails_with_input() {
            let err = shorten_address("not-an-address", 4).unwrap_err();
            assert!(matches!(err, DomainError::InvalidAddress(ref s) if s == "not-an-address"));
        }
    }

    mod contract_address {
        use super::*;

        #[test]
        fn accepts_nonzero() {
            assert_eq!(
                validate_contract_address(LOWER).unwrap().as_str(),
                CHECKSUMMED
            );
        }

        #[test]
        fn rejects_zero() {
            let zero = format!("0x{}", "0".repeat(40));
            assert!(matches!(
                validate_contract_address(&zero),
                Err(DomainError::ZeroAddress)
            ));
            assert!(Address::zero().is_zero());
        }

        #[test]
        fn rejects_invalid() {
            assert!(matches!(
                validate_contract_address("0xzz"),
                Err(DomainError::InvalidAddress(_))
            ));
        }
    }

    #[test]
    fn serde_uses_checksummed_string() {
        let addr = is_address(LOWER).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{CHECKSUMMED}\""));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
        assert!(serde_json::from_str::<Address>("\"0x12\"").is_err());
    }
}
