use crate::domain::ecdsa;
use crate::domain::errors::ApprovalError;
use crate::ports::outbound::SignatureVerifier;
use shared_types::Address;

/// k256-backed verifier for `r ‖ s ‖ v` signatures over `keccak256(message)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Verifier;

impl Secp256k1Verifier {
    pub fn new() -> Self {
        Self
    }
}

impl SignatureVerifier for Secp256k1Verifier {
    fn verify_signature(
        &self,
        signer: &Address,
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), ApprovalError> {
        ecdsa::verify_signer(signer, message, signature)
    }
}
