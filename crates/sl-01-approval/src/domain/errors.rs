//! # Approval Errors

use shared_types::{Address, Height};
use thiserror::Error;

/// Reasons an approval or signature is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApprovalError {
    /// The approval deadline has passed.
    #[error("approval expired at height {expired_height}, current height {current_height}")]
    Expired {
        expired_height: Height,
        current_height: Height,
    },

    /// Wrong length or invalid scalar encoding.
    #[error("invalid signature format: {0}")]
    InvalidFormat(String),

    /// Signature has a high S value.
    #[error("malleable signature (high S value)")]
    MalleableSignature,

    /// Recovery id must be 0, 1, 27 or 28.
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// No public key could be recovered.
    #[error("failed to recover public key")]
    RecoveryFailed,

    /// Recovered signer is not the expected one.
    #[error("signer mismatch: expected {expected}, got {actual}")]
    SignerMismatch { expected: Address, actual: Address },

    /// The sign doc could not be canonically encoded.
    #[error("sign doc encoding failed: {0}")]
    Encoding(String),
}

impl ApprovalError {
    /// True when the failure is the deadline rather than the signature.
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}
