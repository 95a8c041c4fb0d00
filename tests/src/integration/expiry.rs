//! # Expiry Settlement
//!
//! Unanswered challenges are settled by the height hook exactly like an
//! invalid attestation, once.

#[cfg(test)]
mod tests {
    use crate::fixtures::{Harness, Sp, CHALLENGE_WINDOW};
    use ledger_runtime::ErrorKind;
    use proptest::prelude::*;
    use shared_types::LedgerEvent;
    use sl_02_sp_registry::SpStatus;
    use sl_03_object_ledger::RedundancyType;
    use sl_04_challenge::{AttestationResult, ChallengeApi, ChallengeStatus};

    fn slash_count(h: &Harness) -> usize {
        h.store
            .events()
            .iter()
            .filter(|e| matches!(e, LedgerEvent::StorageProviderSlashed { .. }))
            .count()
    }

    #[test]
    fn test_unanswered_challenge_expires_and_slashes() {
        let h = Harness::new();
        let sp = Sp::generate();
        h.bond(&sp, 1_000);
        let object = h
            .create_object(&sp, &[], RedundancyType::Replica, 100)
            .unwrap();
        h.seal(&object, &sp, 20, vec![]).unwrap();

        h.set_height(6);
        let challenge = h.challenge(&object, &sp, 0).unwrap();
        assert_eq!(challenge.expiry_height, 6 + CHALLENGE_WINDOW);

        // At the expiry height the challenge is still answerable.
        assert!(h.runtime.end_block(challenge.expiry_height).unwrap().is_empty());

        let expired = h.runtime.end_block(challenge.expiry_height + 1).unwrap();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].status, ChallengeStatus::Expired);

        let provider = h.provider(&sp);
        assert_eq!(provider.deposit, 900);
        assert_eq!(provider.status, SpStatus::Jailed);
    }

    #[test]
    fn test_sweep_slashes_exactly_once() {
        let h = Harness::new();
        let sp = Sp::generate();
        h.bond(&sp, 1_000);
        let object = h
            .create_object(&sp, &[], RedundancyType::Replica, 100)
            .unwrap();
        h.seal(&object, &sp, 20, vec![]).unwrap();
        let challenge = h.challenge(&object, &sp, 0).unwrap();

        let height = challenge.expiry_height + 1;
        for _ in 0..3 {
            h.runtime.end_block(height).unwrap();
        }
        h.runtime.end_block(height + 50).unwrap();

        assert_eq!(slash_count(&h), 1);
        assert_eq!(h.provider(&sp).deposit, 900);
    }

    #[test]
    fn test_late_attestation_is_rejected_before_sweep() {
        let h = Harness::new();
        let sp = Sp::generate();
        let attester = &h.attester;
        h.bond(&sp, 1_000);
        let object = h
            .create_object(&sp, &[], RedundancyType::Replica, 100)
            .unwrap();
        h.seal(&object, &sp, 20, vec![]).unwrap();
        let challenge = h.challenge(&object, &sp, 0).unwrap();

        h.set_height(challenge.expiry_height + 1);
        let err = h
            .attest(&challenge, attester, AttestationResult::Valid)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChallengeExpired);

        h.runtime.end_block(challenge.expiry_height + 1).unwrap();
        let err = h
            .attest(&challenge, attester, AttestationResult::Valid)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChallengeAlreadyResolved);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        /// Sweeping the same heights in any order and multiplicity gives one
        /// slash per challenge, and the same final deposit as a single sweep.
        #[test]
        fn prop_sweep_order_and_repetition_do_not_matter(
            heights in proptest::collection::vec(0u64..40, 1..10),
        ) {
            let h = Harness::new();
            let sp = Sp::generate();
            h.bond(&sp, 100_000);
            let object = h.create_object(&sp, &[], RedundancyType::Replica, 4096).unwrap();
            h.seal(&object, &sp, 100, vec![]).unwrap();
            for piece in 0..4 {
                h.set_height(1 + u64::from(piece) * 5);
                h.challenge(&object, &sp, piece).unwrap();
            }

            for height in heights {
                h.runtime.end_block(height).unwrap();
            }
            h.runtime.end_block(1_000).unwrap();

            prop_assert_eq!(slash_count(&h), 4);
            prop_assert!(h.runtime.challenges().pending_challenges().unwrap().is_empty());
            // 100_000 × 0.9⁴
            prop_assert_eq!(h.provider(&sp).deposit, 65_610);
        }
    }
}
