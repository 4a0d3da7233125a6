//! # Domain Layer
//!
//! Pure types with no I/O.
//!
//! This layer contains:
//! - **Value Objects**: Addresses, chain ids, percentages, amount bounds, claim state
//! - **Errors**: Domain-specific error types

pub mod errors;
pub mod value_objects;
