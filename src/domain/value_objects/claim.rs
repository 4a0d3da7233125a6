//! # Testnet Claim State
//!
//! Claim status of an account in the testnet faucet campaign and the
//! campaign's activity window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Claim status of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimState {
    /// Status not yet known (no account, lookup pending).
    #[default]
    Unknown,
    /// Account is not on the eligibility list.
    NotRegistered,
    /// Eligible and assets not yet claimed.
    Unclaimed,
    /// Assets already claimed.
    Claimed,
}

impl ClaimState {
    /// Returns the amount the account can still claim: `amount` when
    /// unclaimed, `"0"` otherwise.
    #[must_use]
    pub fn claimable<'a>(&self, amount: &'a str) -> &'a str {
        match self {
            Self::Unclaimed => amount,
            _ => "0",
        }
    }

    /// Returns why the claim action is unavailable, or `None` if it can proceed.
    #[must_use]
    pub const fn claim_blocker(&self) -> Option<&'static str> {
        match self {
            Self::Unclaimed => None,
            Self::Claimed => Some("Test assets Claimed"),
            Self::Unknown | Self::NotRegistered => Some("Address not registered"),
        }
    }

    /// Returns whether the status is still being resolved.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns whether the account is on the eligibility list.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        matches!(self, Self::Unclaimed | Self::Claimed)
    }
}

impl fmt::Display for ClaimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::NotRegistered => write!(f, "not_registered"),
            Self::Unclaimed => write!(f, "unclaimed"),
            Self::Claimed => write!(f, "claimed"),
        }
    }
}

/// Phase of a campaign relative to its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignPhase {
    /// Not started yet.
    Soon,
    /// Running.
    Active,
    /// Finished.
    #[serde(rename = "end")]
    Ended,
}

impl fmt::Display for CampaignPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Soon => write!(f, "soon"),
            Self::Active => write!(f, "active"),
            Self::Ended => write!(f, "end"),
        }
    }
}

/// Half-open campaign window `[start, end)` in Unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCampaignWindow")]
pub struct CampaignWindow {
    start_ms: i64,
    end_ms: i64,
}

#[derive(Deserialize)]
struct RawCampaignWindow {
    start_ms: i64,
    end_ms: i64,
}

impl TryFrom<RawCampaignWindow> for CampaignWindow {
    type Error = &'static str;

    fn try_from(raw: RawCampaignWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start_ms, raw.end_ms).ok_or("campaign window starts after it ends")
    }
}

impl CampaignWindow {
    /// Creates a window, or `None` if `start_ms > end_ms`.
    #[must_use]
    pub const fn new(start_ms: i64, end_ms: i64) -> Option<Self> {
        if start_ms > end_ms {
            return None;
        }
        Some(Self { start_ms, end_ms })
    }

    /// Start of the window.
    #[must_use]
    pub const fn start_ms(&self) -> i64 {
        self.start_ms
    }

    /// End of the window (exclusive).
    #[must_use]
    pub const fn end_ms(&self) -> i64 {
        self.end_ms
    }

    /// Returns the phase at `now_ms`.
    #[must_use]
    pub const fn phase(&self, now_ms: i64) -> CampaignPhase {
        if now_ms < self.start_ms {
            CampaignPhase::Soon
        } else if now_ms < self.end_ms {
            CampaignPhase::Active
        } else {
            CampaignPhase::Ended
        }
    }

    /// Returns the phase at a wall-clock instant.
    #[must_use]
    pub fn phase_at(&self, now: DateTime<Utc>) -> CampaignPhase {
        self.phase(now.timestamp_millis())
    }

    /// Milliseconds until the next boundary (start while `Soon`, end while
    /// `Active`), or zero once ended.
    #[must_use]
    pub const fn millis_until_next(&self, now_ms: i64) -> i64 {
        match self.phase(now_ms) {
            CampaignPhase::Soon => self.start_ms.saturating_sub(now_ms),
            CampaignPhase::Active => self.end_ms.saturating_sub(now_ms),
            CampaignPhase::Ended => 0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod claim_state {
        use super::*;

        #[test]
        fn claimable_only_when_unclaimed() {
            assert_eq!(ClaimState::Unclaimed.claimable("100,000"), "100,000");
            assert_eq!(ClaimState::Claimed.claimable("100,000"), "0");
            assert_eq!(ClaimState::NotRegistered.claimable("5"), "0");
            assert_eq!(ClaimState::Unknown.claimable("20"), "0");
        }

        #[test]
        fn claim_blocker_messages() {
            assert_eq!(ClaimState::Unclaimed.claim_blocker(), None);
            assert_eq!(
                ClaimState::Claimed.claim_blocker(),
                Some("Test assets Claimed")
            );
            assert_eq!(
                ClaimState::NotRegistered.claim_blocker(),
                Some("Address not registered")
            );
        }

        #[test]
        fn pending_and_eligibility() {
            assert!(ClaimState::Unknown.is_pending());
            assert!(!ClaimState::Claimed.is_pending());
            assert!(ClaimState::Claimed.is_eligible());
            assert!(!ClaimState::NotRegistered.is_eligible());
        }

        #[test]
        fn serde_uses_snake_case() {
            let json = serde_json::to_string(&ClaimState::NotRegistered).unwrap();
            assert_eq!(json, "\"not_registered\"");
        }
    }

    mod campaign_window {
        use super::*;

        const START: i64 = 1_666_238_460_000;
        const END: i64 = 1_666_843_140_000;

        #[test]
        fn phases() {
            let window = CampaignWindow::new(START, END).unwrap();
            assert_eq!(window.phase(START - 1), CampaignPhase::Soon);
            assert_eq!(window.phase(START), CampaignPhase::Active);
            assert_eq!(window.phase(END - 1), CampaignPhase::Active);
            assert_eq!(window.phase(END), CampaignPhase::Ended);
        }

        #[test]
        fn phase_at_wall_clock() {
            let window = CampaignWindow::new(START, END).unwrap();
            let during = DateTime::<Utc>::from_timestamp_millis(START + 1_000).unwrap();
            assert_eq!(window.phase_at(during), CampaignPhase::Active);
        }

        #[test]
        fn countdown() {
            let window = CampaignWindow::new(START, END).unwrap();
            assert_eq!(window.millis_until_next(START - 500), 500);
            assert_eq!(window.millis_until_next(END - 250), 250);
            assert_eq!(window.millis_until_next(END + 1), 0);
        }

        #[test]
        fn inverted_window_is_rejected() {
            assert!(CampaignWindow::new(END, START).is_none());
        }

        #[test]
        fn deserialization_checks_order() {
            let window: CampaignWindow =
                serde_json::from_str(&format!(r#"{{"start_ms":{START},"end_ms":{END}}}"#))
                    .unwrap();
            assert_eq!(window, CampaignWindow::new(START, END).unwrap());

            let err = serde_json::from_str::<CampaignWindow>(r#"{"start_ms":10,"end_ms":5}"#)
                .unwrap_err();
            assert!(err.to_string().contains("starts after it ends"));
        }

        #[test]
        fn phase_display_matches_labels() {
            assert_eq!(CampaignPhase::Soon.to_string(), "soon");
            assert_eq!(CampaignPhase::Ended.to_string(), "end");
        }
    }
}
