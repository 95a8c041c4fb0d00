//! Error types for the registry.

use shared_types::{AddressError, Address, StoreError};
use thiserror::Error;

/// Registry errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A message address is malformed.
    #[error("invalid {field} address: {source}")]
    InvalidAddress {
        field: &'static str,
        #[source]
        source: AddressError,
    },

    /// Malformed or missing request fields.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Deposit amount not acceptable.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// No provider registered at the address.
    #[error("storage provider not found: {0}")]
    SpNotFound(Address),

    /// State store failure, propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
