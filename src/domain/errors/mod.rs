//! # Domain Errors
//!
//! Error types raised when callers break the preconditions of the domain helpers.

pub mod domain_error;

pub use domain_error::{DomainError, DomainResult};
