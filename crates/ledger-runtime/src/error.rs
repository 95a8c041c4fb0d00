//! # Unified Errors
//!
//! Subsystem errors keep their own types; [`ErrorKind`] is the stable,
//! closed classification hosts match on.

use shared_types::StoreError;
use sl_02_sp_registry::RegistryError;
use sl_03_object_ledger::ObjectError;
use sl_04_challenge::ChallengeError;
use thiserror::Error;

/// Stable failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAddress,
    InvalidRequest,
    InvalidAmount,
    ObjectNotFound,
    ObjectNotSealed,
    SpNotFound,
    SpNotAssigned,
    SpNotActive,
    SealExpired,
    InsufficientSignatures,
    ChecksumMismatch,
    ChallengeNotFound,
    ChallengeExpired,
    ChallengeAlreadyResolved,
    SignatureInvalid,
    Unauthorized,
    Store,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidAddress => "invalid_address",
            Self::InvalidRequest => "invalid_request",
            Self::InvalidAmount => "invalid_amount",
            Self::ObjectNotFound => "object_not_found",
            Self::ObjectNotSealed => "object_not_sealed",
            Self::SpNotFound => "sp_not_found",
            Self::SpNotAssigned => "sp_not_assigned",
            Self::SpNotActive => "sp_not_active",
            Self::SealExpired => "seal_expired",
            Self::InsufficientSignatures => "insufficient_signatures",
            Self::ChecksumMismatch => "checksum_mismatch",
            Self::ChallengeNotFound => "challenge_not_found",
            Self::ChallengeExpired => "challenge_expired",
            Self::ChallengeAlreadyResolved => "challenge_already_resolved",
            Self::SignatureInvalid => "signature_invalid",
            Self::Unauthorized => "unauthorized",
            Self::Store => "store",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any failure surfaced by the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Object(#[from] ObjectError),

    #[error(transparent)]
    Challenge(#[from] ChallengeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A message body did not decode for its type URL.
    #[error("cannot decode {type_url}: {reason}")]
    Decode { type_url: String, reason: String },

    #[error("unknown message type {0}")]
    UnknownMessage(String),
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Registry(e) => match e {
                RegistryError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
                RegistryError::InvalidRequest(_) => ErrorKind::InvalidRequest,
                RegistryError::InvalidAmount(_) => ErrorKind::InvalidAmount,
                RegistryError::SpNotFound(_) => ErrorKind::SpNotFound,
                RegistryError::Store(_) => ErrorKind::Store,
            },
            Self::Object(e) => match e {
                ObjectError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
                ObjectError::InvalidRequest(_) => ErrorKind::InvalidRequest,
                ObjectError::ObjectNotFound(_) => ErrorKind::ObjectNotFound,
                ObjectError::SpNotFound(_) => ErrorKind::SpNotFound,
                ObjectError::SpNotActive(_) => ErrorKind::SpNotActive,
                ObjectError::SpNotAssigned { .. } => ErrorKind::SpNotAssigned,
                ObjectError::SealExpired { .. } => ErrorKind::SealExpired,
                ObjectError::InsufficientSignatures { .. } => ErrorKind::InsufficientSignatures,
                ObjectError::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
                ObjectError::SignatureInvalid { .. } => ErrorKind::SignatureInvalid,
                ObjectError::Store(_) => ErrorKind::Store,
            },
            Self::Challenge(e) => match e {
                ChallengeError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
                ChallengeError::InvalidRequest(_) | ChallengeError::Params(_) => {
                    ErrorKind::InvalidRequest
                }
                ChallengeError::ObjectNotFound(_) => ErrorKind::ObjectNotFound,
                ChallengeError::ObjectNotSealed(_) => ErrorKind::ObjectNotSealed,
                ChallengeError::SpNotFound(_) => ErrorKind::SpNotFound,
                ChallengeError::SpNotAssigned { .. } => ErrorKind::SpNotAssigned,
                ChallengeError::ChallengeNotFound(_) => ErrorKind::ChallengeNotFound,
                ChallengeError::ChallengeExpired { .. } => ErrorKind::ChallengeExpired,
                ChallengeError::ChallengeAlreadyResolved { .. } => {
                    ErrorKind::ChallengeAlreadyResolved
                }
                ChallengeError::SignatureInvalid { .. } => ErrorKind::SignatureInvalid,
                ChallengeError::Unauthorized { .. } => ErrorKind::Unauthorized,
                ChallengeError::Store(_) => ErrorKind::Store,
            },
            Self::Store(_) => ErrorKind::Store,
            Self::Decode { .. } | Self::UnknownMessage(_) => ErrorKind::InvalidRequest,
        }
    }
}
