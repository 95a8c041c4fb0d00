//! Error types for the challenge engine.

use super::entities::ChallengeStatus;
use shared_types::{Address, AddressError, ChallengeId, Height, ObjectId, ParamsError, StoreError};
use sl_02_sp_registry::RegistryError;
use sl_03_object_ledger::ObjectError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeError {
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

    #[error("object {0} is not sealed")]
    ObjectNotSealed(ObjectId),

    #[error("storage provider not found: {0}")]
    SpNotFound(Address),

    #[error("storage provider {sp} is not assigned to object {object_id}")]
    SpNotAssigned { object_id: ObjectId, sp: Address },

    #[error("challenge not found: {0}")]
    ChallengeNotFound(ChallengeId),

    #[error("challenge {challenge_id} expired at height {expiry_height}, current height {current_height}")]
    ChallengeExpired {
        challenge_id: ChallengeId,
        expiry_height: Height,
        current_height: Height,
    },

    #[error("challenge {challenge_id} already resolved as {status:?}")]
    ChallengeAlreadyResolved {
        challenge_id: ChallengeId,
        status: ChallengeStatus,
    },

    #[error("invalid signature from {signer}: {reason}")]
    SignatureInvalid { signer: Address, reason: String },

    #[error("{signer} is not authorized: {reason}")]
    Unauthorized { signer: Address, reason: &'static str },

    #[error("invalid params: {0}")]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<RegistryError> for ChallengeError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::SpNotFound(address) => Self::SpNotFound(address),
            RegistryError::Store(e) => Self::Store(e),
            other => Self::InvalidRequest(other.to_string()),
        }
    }
}

impl From<ObjectError> for ChallengeError {
    fn from(err: ObjectError) -> Self {
        match err {
            ObjectError::ObjectNotFound(id) => Self::ObjectNotFound(id),
            ObjectError::Store(e) => Self::Store(e),
            other => Self::InvalidRequest(other.to_string()),
        }
    }
}

pub type ChallengeResult<T> = Result<T, ChallengeError>;
