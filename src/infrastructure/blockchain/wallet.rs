//! # Wallet Provider Port
//!
//! Port definition for the injected browser-wallet provider.
//!
//! The exchange never reaches for an ambient wallet object. Anything that
//! needs the wallet takes a [`WalletProvider`] explicitly; `None` means no
//! wallet is connected.

use crate::domain::value_objects::Address;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// JSON-RPC method used to ask the wallet to track a token.
pub const WATCH_ASSET_METHOD: &str = "wallet_watchAsset";

/// Error type for wallet requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The user rejected the request.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The provider could not be reached.
    #[error("wallet transport error: {0}")]
    Transport(String),

    /// The provider answered with something unexpected.
    #[error("unexpected wallet response: {0}")]
    UnexpectedResponse(String),

    /// The request could not be encoded.
    #[error("request encoding error: {0}")]
    Encoding(String),
}

/// Result type for wallet requests.
pub type WalletResult<T> = Result<T, WalletError>;

/// EIP-1193 style request interface of a connected wallet.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Sends a JSON-RPC request to the wallet.
    ///
    /// # Errors
    ///
    /// Returns a `WalletError` if the wallet rejects or fails the request.
    async fn request(&self, method: &str, params: Value) -> WalletResult<Value>;
}

/// Token details for a `wallet_watchAsset` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchAssetOptions {
    /// Token contract address.
    pub address: Address,
    /// Ticker symbol.
    pub symbol: String,
    /// Token decimals.
    pub decimals: u8,
    /// Token logo URL; empty for none.
    pub image: String,
}

/// A `wallet_watchAsset` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchAssetRequest {
    #[serde(rename = "type")]
    asset_type: &'static str,
    options: WatchAssetOptions,
}

impl WatchAssetRequest {
    /// Creates an ERC-20 watch request without a logo.
    #[must_use]
    pub fn erc20(address: Address, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            asset_type: "ERC20",
            options: WatchAssetOptions {
                address,
                symbol: symbol.into(),
                decimals,
                image: String::new(),
            },
        }
    }

    /// Sets the token logo URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.options.image = image.into();
        self
    }

    /// Returns the token details.
    #[must_use]
    pub const fn options(&self) -> &WatchAssetOptions {
        &self.options
    }
}

/// Asks the wallet to track a token.
///
/// Returns `Ok(false)` without doing anything when no wallet is connected,
/// otherwise the wallet's answer.
///
/// # Errors
///
/// Returns a `WalletError` if the request fails or the wallet's answer is not a boolean.
pub async fn add_token_to_wallet(
    provider: Option<&dyn WalletProvider>,
    request: &WatchAssetRequest,
) -> WalletResult<bool> {
    let Some(provider) = provider else {
        tracing::debug!("no wallet connected, skipping watch asset request");
        return Ok(false);
    };

    let params =
        serde_json::to_value(request).map_err(|e| WalletError::Encoding(e.to_string()))?;
    let response = provider.request(WATCH_ASSET_METHOD, params).await?;

    response
        .as_bool()
        .ok_or_else(|| WalletError::UnexpectedResponse(response.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::is_address;
    use std::sync::Mutex;

    /// A wallet that records requests and answers with a fixed value.
    struct RecordingWallet {
        answer: WalletResult<Value>,
        seen: Mutex<Vec<(String, Value)>>,
    }

    impl RecordingWallet {
        fn answering(answer: WalletResult<Value>) -> Self {
            Self {
                answer,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl WalletProvider for RecordingWallet {
        async fn request(&self, method: &str, params: Value) -> WalletResult<Value> {
            self.seen.lock().unwrap().push((method.to_string(), params));
            self.answer.clone()
        }
    }

    fn usdc() -> WatchAssetRequest {
        let address = is_address("0x314195c69d8f0236939a31f64cb367764672ca0f").unwrap();
        WatchAssetRequest::erc20(address, "tUSDC", 18)
    }

    #[test]
    fn request_serializes_to_watch_asset_params() {
        let json = serde_json::to_value(usdc().with_image("https://logo")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "ERC20",
                "options": {
                    "address": "0x314195C69d8F0236939a31f64cB367764672CA0f",
                    "symbol": "tUSDC",
                    "decimals": 18,
                    "image": "https://logo"
                }
            })
        );
    }

    #[tokio::test]
    async fn no_wallet_is_a_noop() {
        assert!(!add_token_to_wallet(None, &usdc()).await.unwrap());
    }

    #[tokio::test]
    async fn forwards_to_wallet() {
        let wallet = RecordingWallet::answering(Ok(Value::Bool(true)));
        assert!(add_token_to_wallet(Some(&wallet), &usdc()).await.unwrap());

        let seen = wallet.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (method, params) = seen.first().unwrap();
        assert_eq!(method, WATCH_ASSET_METHOD);
        assert_eq!(params["options"]["symbol"], "tUSDC");
        assert_eq!(params["options"]["image"], "");
    }

    #[tokio::test]
    async fn propagates_rejection() {
        let wallet = RecordingWallet::answering(Err(WalletError::Rejected("user denied".into())));
        let err = add_token_to_wallet(Some(&wallet), &usdc()).await.unwrap_err();
        assert_eq!(err, WalletError::Rejected("user denied".into()));
    }

    #[tokio::test]
    async fn non_boolean_answer_is_unexpected() {
        let wallet = RecordingWallet::answering(Ok(Value::Null));
        assert!(matches!(
            add_token_to_wallet(Some(&wallet), &usdc()).await,
            Err(WalletError::UnexpectedResponse(_))
        ));
    }
}
