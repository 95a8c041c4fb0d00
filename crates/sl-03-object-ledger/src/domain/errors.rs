//! Error types for the object ledger.

use shared_types::{Address, AddressError, Height, ObjectId, StoreError};
use sl_02_sp_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectError {
    #[error("invalid {field} address: {source}")]
    InvalidAddress {
        field: &'static str,
        #[source]
        source: AddressError,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("storage provider not found: {0}")]
    SpNotFound(Address),

    #[error("storage provider not active: {0}")]
    SpNotActive(Address),

    #[error("storage provider {sp} is not assigned to object {object_id}")]
    SpNotAssigned { object_id: ObjectId, sp: Address },

    #[error("seal approval expired at height {expired_height}, current height {current_height}")]
    SealExpired {
        expired_height: Height,
        current_height: Height,
    },

    #[error("insufficient secondary signatures: have {have}, need {need}")]
    InsufficientSignatures { have: u32, need: u32 },

    #[error("checksum signed by {sp} does not match object {object_id}")]
    ChecksumMismatch { object_id: ObjectId, sp: Address },

    #[error("invalid signature from {signer}: {reason}")]
    SignatureInvalid { signer: Address, reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<RegistryError> for ObjectError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::SpNotFound(address) => Self::SpNotFound(address),
            RegistryError::Store(e) => Self::Store(e),
            other => Self::InvalidRequest(other.to_string()),
        }
    }
}

pub type ObjectResult<T> = Result<T, ObjectError>;
