//! # Storage Lifecycle
//!
//! Bond → create replica object → seal → challenge → attest, checking the
//! deposit and status effects on the registry.

#[cfg(test)]
mod tests {
    use crate::fixtures::{co_signature, Harness, Sp, OBJECT_CHECKSUM};
    use ledger_runtime::ErrorKind;
    use shared_types::LedgerEvent;
    use sl_02_sp_registry::SpStatus;
    use sl_03_object_ledger::{ObjectLedgerApi, ObjectStatus, RedundancyType};
    use sl_04_challenge::{AttestationResult, ChallengeApi, ChallengeStatus};

    #[test]
    fn test_invalid_attestation_slashes_and_jails() {
        let h = Harness::new();
        let sp = Sp::generate();
        let attester = &h.attester;

        let bonded = h.bond(&sp, 1_000);
        assert_eq!(bonded.status, SpStatus::Active);

        h.set_height(5);
        let object = h
            .create_object(&sp, &[], RedundancyType::Replica, 4096)
            .unwrap();
        let sealed = h.seal(&object, &sp, 5 + 10, vec![]).unwrap();
        assert_eq!(sealed.status, ObjectStatus::Sealed);

        h.set_height(6);
        let challenge = h.challenge(&object, &sp, 0).unwrap();
        assert_eq!(challenge.status, ChallengeStatus::Pending);

        h.set_height(8);
        let resolved = h
            .attest(&challenge, attester, AttestationResult::Invalid)
            .unwrap();
        assert_eq!(resolved.status, ChallengeStatus::AttestedInvalid);

        // 10% of 1000 leaves 900, below the 950 bond.
        let provider = h.provider(&sp);
        assert_eq!(provider.deposit, 900);
        assert_eq!(provider.status, SpStatus::Jailed);

        let events = h.store.events();
        let names: Vec<_> = events.iter().map(LedgerEvent::name).collect();
        assert!(names.ends_with(&[
            "challenge.attested",
            "sp.slashed",
            "sp.jailed",
        ]));
    }

    #[test]
    fn test_valid_attestation_keeps_deposit() {
        let h = Harness::new();
        let sp = Sp::generate();
        let secondary = Sp::generate();
        let attester = &h.attester;
        h.bond(&sp, 1_000);
        h.bond(&secondary, 1_000);

        let object = h
            .create_object(&sp, &[&secondary], RedundancyType::Replica, 100)
            .unwrap();
        h.seal(&object, &sp, 20, vec![co_signature(&secondary, OBJECT_CHECKSUM)])
            .unwrap();

        let challenge = h.challenge(&object, &secondary, 0).unwrap();
        h.attest(&challenge, attester, AttestationResult::Valid)
            .unwrap();

        assert_eq!(h.provider(&secondary).deposit, 1_000);
        assert_eq!(h.provider(&secondary).status, SpStatus::Active);

        // First attestation wins.
        let err = h
            .attest(&challenge, attester, AttestationResult::Invalid)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChallengeAlreadyResolved);
        assert_eq!(h.provider(&secondary).deposit, 1_000);
    }

    #[test]
    fn test_only_registered_attesters_settle_challenges() {
        let h = Harness::new();
        let sp = Sp::generate();
        h.bond(&sp, 1_000);

        let object = h
            .create_object(&sp, &[], RedundancyType::Replica, 100)
            .unwrap();
        h.seal(&object, &sp, 20, vec![]).unwrap();
        let challenge = h.challenge(&object, &sp, 0).unwrap();

        // The challenged provider vouching for itself.
        let err = h
            .attest(&challenge, &sp, AttestationResult::Valid)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        // A well-formed signature from an unknown account.
        let err = h
            .attest(&challenge, &Sp::generate(), AttestationResult::Invalid)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        let provider = h.provider(&sp);
        assert_eq!(provider.deposit, 1_000);
        assert_eq!(provider.status, SpStatus::Active);
        let stored = h.runtime.challenges().get_challenge(challenge.id).unwrap().unwrap();
        assert_eq!(stored.status, ChallengeStatus::Pending);
    }

    #[test]
    fn test_jailed_sp_excluded_from_new_objects_only() {
        let h = Harness::new();
        let sp = Sp::generate();
        let attester = &h.attester;
        h.bond(&sp, 1_000);

        let object = h
            .create_object(&sp, &[], RedundancyType::Replica, 100)
            .unwrap();
        h.seal(&object, &sp, 20, vec![]).unwrap();
        let challenge = h.challenge(&object, &sp, 0).unwrap();
        h.attest(&challenge, attester, AttestationResult::Invalid)
            .unwrap();

        let err = h
            .create_object(&sp, &[], RedundancyType::Replica, 100)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SpNotActive);

        // Existing sealed objects stay sealed and challengeable.
        let stored = h.runtime.objects().get_object(object.id).unwrap().unwrap();
        assert_eq!(stored.status, ObjectStatus::Sealed);
        assert!(h.challenge(&object, &sp, 0).is_ok());
    }

    #[test]
    fn test_challenge_requires_sealed_object() {
        let h = Harness::new();
        let sp = Sp::generate();
        h.bond(&sp, 1_000);

        let object = h
            .create_object(&sp, &[], RedundancyType::Replica, 100)
            .unwrap();
        let err = h.challenge(&object, &sp, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ObjectNotSealed);
    }

    #[test]
    fn test_expired_seal_approval_rejected() {
        let h = Harness::new();
        let sp = Sp::generate();
        h.bond(&sp, 1_000);

        h.set_height(5);
        let object = h
            .create_object(&sp, &[], RedundancyType::Replica, 100)
            .unwrap();
        h.set_height(16);
        let err = h.seal(&object, &sp, 15, vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SealExpired);
    }
}
