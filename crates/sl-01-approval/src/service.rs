//! # Approval Verification Service
//!
//! Implements [`ApprovalApi`] on top of a [`SignatureVerifier`]. The check
//! order is fixed: the deadline first, then the signature, so an expired
//! approval is always reported as expired.

use crate::adapters::Secp256k1Verifier;
use crate::domain::errors::ApprovalError;
use crate::ports::inbound::ApprovalApi;
use crate::ports::outbound::SignatureVerifier;
use shared_types::{Address, Height};
use tracing::debug;

/// Stateless approval verifier.
#[derive(Debug, Clone, Default)]
pub struct ApprovalVerifier<S: SignatureVerifier = Secp256k1Verifier> {
    signatures: S,
}

impl<S: SignatureVerifier> ApprovalVerifier<S> {
    pub fn new(signatures: S) -> Self {
        Self { signatures }
    }
}

impl<S: SignatureVerifier> ApprovalApi for ApprovalVerifier<S> {
    fn check(
        &self,
        signer: &Address,
        message: &[u8],
        signature: &[u8],
        expired_height: Height,
        current_height: Height,
    ) -> Result<(), ApprovalError> {
        if current_height > expired_height {
            debug!(%signer, expired_height, current_height, "approval expired");
            return Err(ApprovalError::Expired {
                expired_height,
                current_height,
            });
        }

        self.signatures
            .verify_signature(signer, message, signature)
            .inspect_err(|e| debug!(%signer, error = %e, "approval signature rejected"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::approval::{Approval, SecondarySpSignDoc};
    use crate::domain::sign_doc::SignDoc;
    use crate::testing::{generate_keypair, sign_doc, sign_message};
    use proptest::prelude::*;

    fn verifier() -> ApprovalVerifier {
        ApprovalVerifier::default()
    }

    #[test]
    fn test_valid_until_expiry_inclusive() {
        let (key, addr) = generate_keypair();
        let sig = sign_message(&key, b"m");
        assert!(verifier().verify(&addr, b"m", &sig, 10, 10));
        assert!(verifier().verify(&addr, b"m", &sig, 10, 0));
        assert!(!verifier().verify(&addr, b"m", &sig, 10, 11));
    }

    #[test]
    fn test_expiry_reported_before_signature() {
        let addr = Address::new([9; 20]);
        let err = verifier().check(&addr, b"m", &[0u8; 3], 4, 5).unwrap_err();
        assert!(err.is_expired());
    }

    #[test]
    fn test_check_approval_over_sign_doc() {
        let (key, addr) = generate_keypair();
        let doc = SecondarySpSignDoc::new(addr, [3; 32]);
        let approval = Approval::new(20, sign_doc(&key, &doc));
        let bytes = doc.sign_bytes().unwrap();
        assert_eq!(verifier().check_approval(&addr, &bytes, &approval, 7), Ok(()));

        let tampered = SecondarySpSignDoc::new(addr, [4; 32]).sign_bytes().unwrap();
        assert!(verifier().check_approval(&addr, &tampered, &approval, 7).is_err());
    }

    struct RejectAll;

    impl SignatureVerifier for RejectAll {
        fn verify_signature(&self, _: &Address, _: &[u8], _: &[u8]) -> Result<(), ApprovalError> {
            Err(ApprovalError::RecoveryFailed)
        }
    }

    #[test]
    fn test_delegates_to_signature_port() {
        let v = ApprovalVerifier::new(RejectAll);
        assert_eq!(
            v.check(&Address::default(), b"m", b"s", 1, 1),
            Err(ApprovalError::RecoveryFailed)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_verify_respects_deadline(expired_height in 0u64..1_000, current_height in 0u64..1_000) {
            let (key, addr) = generate_keypair();
            let sig = sign_message(&key, b"seal");
            prop_assert_eq!(
                verifier().verify(&addr, b"seal", &sig, expired_height, current_height),
                current_height <= expired_height
            );
        }

        #[test]
        fn prop_signature_bound_to_message(
            signed in proptest::collection::vec(any::<u8>(), 0..64),
            presented in proptest::collection::vec(any::<u8>(), 0..64)
        ) {
            prop_assume!(signed != presented);
            let (key, addr) = generate_keypair();
            let sig = sign_message(&key, &signed);
            prop_assert!(verifier().verify(&addr, &signed, &sig, 10, 10));
            prop_assert!(!verifier().verify(&addr, &presented, &sig, 10, 10));
        }
    }
}
