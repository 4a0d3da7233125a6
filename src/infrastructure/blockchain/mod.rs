//! # Blockchain Helpers
//!
//! Chain-facing helpers that sit outside the pure domain.
//!
//! ## Available Components
//!
//! - [`ExplorerRegistry`]: Chain → block explorer lookup
//! - [`get_etherscan_link`]: Explorer URL via the process-wide registry
//! - [`GasMargin`]: Gas estimate safety margin
//! - [`WalletProvider`]: Injected wallet port

pub mod explorer;
pub mod gas;
pub mod wallet;

pub use explorer::{
    get_etherscan_link, global_registry, install_global_registry, ExplorerEntry, ExplorerError,
    ExplorerFamily, ExplorerRegistry, ExplorerResult, LinkKind,
};
pub use gas::{calculate_gas_margin, GasMargin};
pub use wallet::{
    add_token_to_wallet, WalletError, WalletProvider, WalletResult, WatchAssetOptions,
    WatchAssetRequest,
};
