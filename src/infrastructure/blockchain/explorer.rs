//! # Block Explorer Links
//!
//! Builds block-explorer URLs for transactions, tokens, addresses and blocks.
//!
//! Each chain in the [`ExplorerRegistry`] has a base URL and an
//! [`ExplorerFamily`]. Families differ only in how they path token pages:
//!
//! | Family       | Token path          |
//! |--------------|---------------------|
//! | `etherscan`  | `/token/{addr}`     |
//! | `blockscout` | `/tokens/{addr}`    |
//! | `harmony`    | `/address/{addr}`   |
//! | `okex`       | `/tokenAddr/{addr}` |
//!
//! Transactions are always `/tx/{hash}`.
//!
//! # Examples
//!
//! ```
//! use ladder_utils::domain::value_objects::ChainId;
//! use ladder_utils::infrastructure::blockchain::explorer::{ExplorerRegistry, LinkKind};
//!
//! let registry = ExplorerRegistry::builtin();
//! let link = registry.link(ChainId::ETHEREUM, "0xabc", LinkKind::Transaction).unwrap();
//! assert_eq!(link, "https://etherscan.io/tx/0xabc");
//! ```

use crate::config::ExplorerConfig;
use crate::domain::value_objects::ChainId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Error type for explorer link operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    /// No explorer registered for the chain.
    #[error("unknown chain: {0}")]
    UnknownChain(ChainId),

    /// Link kind string not recognised.
    #[error("unknown link kind: {0}")]
    UnknownLinkKind(String),
}

/// Result type for explorer operations.
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// What an explorer link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Transaction hash.
    Transaction,
    /// Token contract.
    Token,
    /// Account or contract address.
    Address,
    /// Block number or hash.
    Block,
}

impl LinkKind {
    /// Returns the lowercase name, which is also the default path segment.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Transaction => "transaction",
            Self::Token => "token",
            Self::Address => "address",
            Self::Block => "block",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkKind {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transaction" | "tx" => Ok(Self::Transaction),
            "token" => Ok(Self::Token),
            "address" => Ok(Self::Address),
            "block" => Ok(Self::Block),
            other => Err(ExplorerError::UnknownLinkKind(other.to_string())),
        }
    }
}

/// Block explorer software family, which determines URL layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplorerFamily {
    /// Etherscan and its clones (bscscan, polygonscan, ...).
    #[default]
    Etherscan,
    /// Blockscout.
    Blockscout,
    /// Harmony explorer.
    Harmony,
    /// OKX explorer.
    Okex,
}

impl ExplorerFamily {
    /// Returns the path segment for `kind` under this family.
    #[must_use]
    pub const fn path_segment(&self, kind: LinkKind) -> &'static str {
        match (self, kind) {
            (_, LinkKind::Transaction) => "tx",
            (Self::Blockscout, LinkKind::Token) => "tokens",
            (Self::Harmony, LinkKind::Token) => "address",
            (Self::Okex, LinkKind::Token) => "tokenAddr",
            (_, kind) => kind.as_str(),
        }
    }

    /// Builds `{base_url}/{segment}/{data}`.
    #[must_use]
    pub fn build_link(&self, base_url: &str, data: &str, kind: LinkKind) -> String {
        format!("{}/{}/{}", base_url, self.path_segment(kind), data)
    }
}

impl fmt::Display for ExplorerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Etherscan => write!(f, "etherscan"),
            Self::Blockscout => write!(f, "blockscout"),
            Self::Harmony => write!(f, "harmony"),
            Self::Okex => write!(f, "okex"),
        }
    }
}

/// Explorer registered for one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawExplorerEntry")]
pub struct ExplorerEntry {
    base_url: String,
    family: ExplorerFamily,
}

#[derive(Deserialize)]
struct RawExplorerEntry {
    base_url: String,
    #[serde(default)]
    family: ExplorerFamily,
}

impl From<RawExplorerEntry> for ExplorerEntry {
    fn from(raw: RawExplorerEntry) -> Self {
        Self::new(raw.base_url, raw.family)
    }
}

impl ExplorerEntry {
    /// Creates an entry; trailing slashes on `base_url` are dropped.
    #[must_use]
    pub fn new(base_url: impl Into<String>, family: ExplorerFamily) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            family,
        }
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Explorer family.
    #[must_use]
    pub const fn family(&self) -> ExplorerFamily {
        self.family
    }

    /// Builds a link on this explorer.
    #[must_use]
    pub fn link(&self, data: &str, kind: LinkKind) -> String {
        self.family.build_link(&self.base_url, data, kind)
    }
}

/// Chain → explorer lookup table.
#[derive(Debug, Clone, Default)]
pub struct ExplorerRegistry {
    entries: HashMap<ChainId, ExplorerEntry>,
}

impl ExplorerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry with the networks the exchange ships with.
    #[must_use]
    pub fn builtin() -> Self {
        Self::empty()
            .with_entry(
                ChainId::ETHEREUM,
                ExplorerEntry::new("https://etherscan.io", ExplorerFamily::Etherscan),
            )
            .with_entry(
                ChainId::GOERLI,
                ExplorerEntry::new("https://goerli.etherscan.io", ExplorerFamily::Etherscan),
            )
            .with_entry(
                ChainId::BSC,
                ExplorerEntry::new("https://bscscan.com", ExplorerFamily::Etherscan),
            )
            .with_entry(
                ChainId::POLYGON,
                ExplorerEntry::new("https://polygonscan.com", ExplorerFamily::Etherscan),
            )
            .with_entry(
                ChainId::SEPOLIA,
                ExplorerEntry::new("https://sepolia.etherscan.io", ExplorerFamily::Etherscan),
            )
    }

    /// Creates the built-in registry overlaid with configured explorers.
    ///
    /// A configured chain replaces the built-in entry for that chain.
    #[must_use]
    pub fn from_config(explorers: &[ExplorerConfig]) -> Self {
        let mut registry = Self::builtin();
        for explorer in explorers {
            let chain_id = ChainId::new(explorer.chain_id);
            tracing::debug!(
                chain_id = %chain_id,
                url = %explorer.url,
                family = %explorer.family,
                "registering block explorer"
            );
            registry.insert(chain_id, ExplorerEntry::new(&explorer.url, explorer.family));
        }
        registry
    }

    /// Adds or replaces an entry, returning the registry.
    #[must_use]
    pub fn with_entry(mut self, chain_id: ChainId, entry: ExplorerEntry) -> Self {
        self.insert(chain_id, entry);
        self
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, chain_id: ChainId, entry: ExplorerEntry) {
        self.entries.insert(chain_id, entry);
    }

    /// Returns the entry for a chain.
    #[must_use]
    pub fn get(&self, chain_id: ChainId) -> Option<&ExplorerEntry> {
        self.entries.get(&chain_id)
    }

    /// Returns the registered chains in ascending order.
    #[must_use]
    pub fn chains(&self) -> Vec<ChainId> {
        let mut chains: Vec<ChainId> = self.entries.keys().copied().collect();
        chains.sort_unstable();
        chains
    }

    /// Number of registered chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no chains are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds an explorer link.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::UnknownChain` if `chain_id` is not registered.
    pub fn link(&self, chain_id: ChainId, data: &str, kind: LinkKind) -> ExplorerResult<String> {
        self.get(chain_id)
            .map(|entry| entry.link(data, kind))
            .ok_or(ExplorerError::UnknownChain(chain_id))
    }
}

static GLOBAL_REGISTRY: OnceLock<ExplorerRegistry> = OnceLock::new();

/// Installs the process-wide registry.
///
/// Must run before the first call to [`global_registry`] or
/// [`get_etherscan_link`]; afterwards the registry is fixed.
///
/// # Errors
///
/// Returns the rejected registry if one is already installed.
pub fn install_global_registry(registry: ExplorerRegistry) -> Result<(), ExplorerRegistry> {
    GLOBAL_REGISTRY.set(registry)
}

/// Returns the process-wide registry, falling back to [`ExplorerRegistry::builtin`].
pub fn global_registry() -> &'static ExplorerRegistry {
    GLOBAL_REGISTRY.get_or_init(ExplorerRegistry::builtin)
}

/// Builds an explorer link using the process-wide registry.
///
/// # Errors
///
/// Returns `ExplorerError::UnknownChain` if `chain_id` is not registered.
pub fn get_etherscan_link(chain_id: ChainId, data: &str, kind: LinkKind) -> ExplorerResult<String> {
    global_registry().link(chain_id, data, kind)
}
