//! # Infrastructure Layer
//!
//! Adapters for the chain and the user's wallet.

pub mod blockchain;
