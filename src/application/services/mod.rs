//! # Application Services
//!
//! Services that combine domain helpers with injected collaborators.
//!
//! - [`slippage`]: Slippage bounds and tolerance
//! - [`nft_import`]: Import-form validation for NFTs
//! - [`testnet_claim`]: Testnet faucet campaign

pub mod nft_import;
pub mod slippage;
pub mod testnet_claim;

pub use nft_import::{
    check_import_form, parse_token_id, ImportCandidate, ImportError, NftImportValidator,
    NftMetadataSource,
};
pub use slippage::{
    basis_points_to_percent, calculate_slippage_amount, SlippageTolerance, DEFAULT_SLIPPAGE_BPS,
    MAX_SLIPPAGE_BPS,
};
pub use testnet_claim::{
    ClaimStatusSource, ClaimableAllocation, FaucetAllocation, TestnetCampaign,
};
