//! # Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::ApprovalError;
use shared_types::Address;

/// Signature verification primitive of the key-management component.
///
/// Given a signer identity, message bytes and signature bytes, succeeds only
/// if the signature is valid for that signer.
pub trait SignatureVerifier: Send + Sync {
    fn verify_signature(
        &self,
        signer: &Address,
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), ApprovalError>;
}
