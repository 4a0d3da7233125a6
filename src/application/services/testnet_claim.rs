//! # Testnet Faucet Campaign
//!
//! Claim status lookups and allocations for the testnet faucet campaign.
//!
//! The claim status of an account comes from an injected
//! [`ClaimStatusSource`] (the faucet contract in production).

use crate::application::error::ApplicationResult;
use crate::domain::value_objects::{
    is_address, Address, CampaignPhase, CampaignWindow, ClaimState,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Source of per-account claim status.
#[async_trait]
pub trait ClaimStatusSource: Send + Sync {
    /// Returns the claim status of `account`.
    ///
    /// # Errors
    ///
    /// Returns an `ApplicationError` if the status cannot be fetched.
    async fn claim_state(&self, account: &Address) -> ApplicationResult<ClaimState>;
}

/// One test asset handed out by the faucet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaucetAllocation {
    /// Token symbol.
    pub symbol: String,
    /// Token contract.
    pub token: Address,
    /// Token decimals.
    pub decimals: u8,
    /// Display amount, already formatted (e.g. `"100,000"`).
    pub amount: String,
}

impl FaucetAllocation {
    /// Creates an allocation.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        token: Address,
        decimals: u8,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            token,
            decimals,
            amount: amount.into(),
        }
    }
}

/// What the claim panel shows for one allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimableAllocation<'a> {
    /// The allocation.
    pub allocation: &'a FaucetAllocation,
    /// Amount still claimable (`"0"` unless unclaimed).
    pub claimable: &'a str,
}

/// The testnet faucet campaign.
pub struct TestnetCampaign {
    window: CampaignWindow,
    allocations: Vec<FaucetAllocation>,
    status: Arc<dyn ClaimStatusSource>,
}

impl TestnetCampaign {
    /// Creates a campaign.
    #[must_use]
    pub fn new(
        window: CampaignWindow,
        allocations: Vec<FaucetAllocation>,
        status: Arc<dyn ClaimStatusSource>,
    ) -> Self {
        Self {
            window,
            allocations,
            status,
        }
    }

    /// Campaign window.
    #[must_use]
    pub const fn window(&self) -> &CampaignWindow {
        &self.window
    }

    /// Assets handed out per eligible account.
    #[must_use]
    pub fn allocations(&self) -> &[FaucetAllocation] {
        &self.allocations
    }

    /// Phase at `now`.
    #[must_use]
    pub fn phase_at(&self, now: DateTime<Utc>) -> CampaignPhase {
        self.window.phase_at(now)
    }

    /// Claim status of a connected account; `Unknown` when none is connected.
    ///
    /// # Errors
    ///
    /// Propagates errors from the [`ClaimStatusSource`].
    pub async fn claim_state(&self, account: Option<&Address>) -> ApplicationResult<ClaimState> {
        match account {
            Some(account) => self.status.claim_state(account).await,
            None => Ok(ClaimState::Unknown),
        }
    }

    /// Claim status for an address typed into the eligibility query box.
    ///
    /// Input that is not an address yields `Unknown` without a lookup.
    ///
    /// # Errors
    ///
    /// Propagates errors from the [`ClaimStatusSource`].
    pub async fn query_claim_state(&self, raw_input: &str) -> ApplicationResult<ClaimState> {
        let Some(account) = is_address(raw_input.trim()) else {
            tracing::debug!(input = raw_input, "eligibility query is not an address");
            return Ok(ClaimState::Unknown);
        };
        self.claim_state(Some(&account)).await
    }

    /// Pairs each allocation with what `state` can still claim.
    #[must_use]
    pub fn claimable_allocations(&self, state: ClaimState) -> Vec<ClaimableAllocation<'_>> {
        self.allocations
            .iter()
            .map(|allocation| ClaimableAllocation {
                allocation,
                claimable: state.claimable(&allocation.amount),
            })
            .collect()
    }
}
