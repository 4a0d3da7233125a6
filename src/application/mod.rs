//! # Application Layer
//!
//! Services that combine domain helpers with injected collaborators.
//!
//! ## Services
//!
//! - `SlippageTolerance`: User slippage setting and the bounds it implies
//! - `NftImportValidator`: Ordered checks behind the NFT import form
//! - `TestnetCampaign`: Faucet window and claim eligibility

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{
    ClaimStatusSource, ImportCandidate, ImportError, NftImportValidator, NftMetadataSource,
    SlippageTolerance, TestnetCampaign,
};
