//! # NFT Import Validation
//!
//! Validates the "import NFT" form before a token is added to the user's list.
//!
//! Checks run in order and the first failure is reported:
//!
//! 1. contract address entered
//! 2. contract address valid
//! 3. token ID entered
//! 4. token ID is a number
//! 5. the token exists (via the injected [`NftMetadataSource`])

use crate::application::error::ApplicationError;
use crate::domain::value_objects::{is_address, Address};
use async_trait::async_trait;
use ethers::types::U256;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Reason an import form is not accepted.
///
/// Messages are shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// Contract address field is empty.
    #[error("Enter token contract address")]
    MissingContractAddress,

    /// Contract address is not a valid address.
    #[error("Invalid contract address")]
    InvalidContractAddress,

    /// Token ID field is empty.
    #[error("Enter token ID")]
    MissingTokenId,

    /// Token ID is not a decimal or `0x` hex integer.
    #[error("Invalid token ID")]
    InvalidTokenId,

    /// Metadata lookup found no such token.
    #[error("Token doesnt exist")]
    TokenNotFound,

    /// Metadata lookup failed.
    #[error("lookup failed: {0}")]
    Lookup(#[from] ApplicationError),
}

/// Source of NFT metadata, typically an indexer or an on-chain `uri` call.
#[async_trait]
pub trait NftMetadataSource: Send + Sync {
    /// Returns the token's name, or `None` if the token does not exist.
    ///
    /// # Errors
    ///
    /// Returns an `ApplicationError` on infrastructure failures only.
    async fn token_name(
        &self,
        contract: &Address,
        token_id: U256,
    ) -> Result<Option<String>, ApplicationError>;
}

/// A token that passed every import check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportCandidate {
    /// Token contract.
    pub contract: Address,
    /// Token ID.
    pub token_id: U256,
    /// Token name from metadata.
    pub name: String,
}

/// Parses a token ID given as decimal or `0x`-prefixed hex.
///
/// # Errors
///
/// Returns `ImportError::MissingTokenId` for blank input and
/// `ImportError::InvalidTokenId` for anything else that is not a 256-bit integer.
pub fn parse_token_id(input: &str) -> Result<U256, ImportError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ImportError::MissingTokenId);
    }
    let parsed = match input.strip_prefix("0x") {
        Some(hex) if !hex.is_empty() => U256::from_str_radix(hex, 16).ok(),
        Some(_) => None,
        None => U256::from_dec_str(input).ok(),
    };
    parsed.ok_or(ImportError::InvalidTokenId)
}

/// Runs the synchronous form checks (steps 1-4).
///
/// # Errors
///
/// Returns the first failing [`ImportError`].
pub fn check_import_form(
    contract_address: &str,
    token_id: &str,
) -> Result<(Address, U256), ImportError> {
    let contract_address = contract_address.trim();
    if contract_address.is_empty() {
        return Err(ImportError::MissingContractAddress);
    }
    let contract = is_address(contract_address).ok_or(ImportError::InvalidContractAddress)?;
    let token_id = parse_token_id(token_id)?;
    Ok((contract, token_id))
}

/// Validates import requests against an NFT metadata source.
pub struct NftImportValidator {
    metadata: Arc<dyn NftMetadataSource>,
}

impl NftImportValidator {
    /// Creates a validator.
    #[must_use]
    pub fn new(metadata: Arc<dyn NftMetadataSource>) -> Self {
        Self { metadata }
    }

    /// Runs every import check.
    ///
    /// The metadata source is only consulted once the form checks pass.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ImportError`]; lookup failures surface as
    /// `ImportError::Lookup`.
    pub async fn validate(
        &self,
        contract_address: &str,
        token_id: &str,
    ) -> Result<ImportCandidate, ImportError> {
        let (contract, token_id) = check_import_form(contract_address, token_id)?;

        let name = self
            .metadata
            .token_name(&contract, token_id)
            .await?
            .ok_or(ImportError::TokenNotFound)?;

        tracing::debug!(contract = %contract, token_id = %token_id, name = %name, "nft import accepted");

        Ok(ImportCandidate {
            contract,
            token_id,
            name,
        })
    }
}
