//! # Application Errors
//!
//! Failures reported by the collaborators the application services depend
//! on: the NFT metadata source and the faucet claim-status source.
//!
//! # Examples
//!
//! ```
//! use ladder_utils::application::error::ApplicationError;
//!
//! let err = ApplicationError::external_service("nft-metadata", "timeout");
//! assert_eq!(err.service(), "nft-metadata");
//! ```

use thiserror::Error;

/// Application layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// An injected collaborator could not answer.
    #[error("external service error: {service} - {message}")]
    ExternalService {
        /// Service name.
        service: String,
        /// Error message.
        message: String,
    },
}

impl ApplicationError {
    /// Creates an external service error.
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Returns the name of the failing service.
    #[must_use]
    pub fn service(&self) -> &str {
        match self {
            Self::ExternalService { service, .. } => service,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
