//! # Erasure-Coded Sealing
//!
//! Threshold and checksum rules for co-signatures on erasure-coded objects.

#[cfg(test)]
mod tests {
    use crate::fixtures::{co_signature, piece_checksum, Harness, Sp, EC_THRESHOLD};
    use ledger_runtime::ErrorKind;
    use sl_03_object_ledger::{ObjectStatus, RedundancyType, SecondarySignature};

    struct Setup {
        h: Harness,
        primary: Sp,
        secondaries: Vec<Sp>,
    }

    fn setup(secondaries: usize) -> Setup {
        let h = Harness::new();
        let primary = Sp::generate();
        h.bond(&primary, 1_000);
        let secondaries: Vec<_> = (0..secondaries).map(|_| Sp::generate()).collect();
        for sp in &secondaries {
            h.bond(sp, 1_000);
        }
        Setup {
            h,
            primary,
            secondaries,
        }
    }

    fn signatures(s: &Setup, count: usize) -> Vec<SecondarySignature> {
        s.secondaries
            .iter()
            .enumerate()
            .take(count)
            .map(|(i, sp)| co_signature(sp, piece_checksum(i)))
            .collect()
    }

    #[test]
    fn test_threshold_boundary() {
        let s = setup(6);
        let refs: Vec<_> = s.secondaries.iter().collect();
        let object = s
            .h
            .create_object(&s.primary, &refs, RedundancyType::ErasureCoded, 1 << 20)
            .unwrap();

        let err = s
            .h
            .seal(&object, &s.primary, 50, signatures(&s, EC_THRESHOLD as usize - 1))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientSignatures);

        let sealed = s
            .h
            .seal(&object, &s.primary, 50, signatures(&s, EC_THRESHOLD as usize))
            .unwrap();
        assert_eq!(sealed.status, ObjectStatus::Sealed);

        // Sealed never goes back.
        let err = s
            .h
            .seal(&object, &s.primary, 50, signatures(&s, 6))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_co_signature_over_wrong_shard() {
        let s = setup(4);
        let refs: Vec<_> = s.secondaries.iter().collect();
        let object = s
            .h
            .create_object(&s.primary, &refs, RedundancyType::ErasureCoded, 1 << 20)
            .unwrap();

        let mut sigs = signatures(&s, 4);
        sigs[3] = co_signature(&s.secondaries[3], piece_checksum(0));
        let err = s.h.seal(&object, &s.primary, 50, sigs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChecksumMismatch);
    }

    #[test]
    fn test_ec_object_needs_enough_secondaries() {
        let s = setup(3);
        let refs: Vec<_> = s.secondaries.iter().collect();
        let err = s
            .h
            .create_object(&s.primary, &refs, RedundancyType::ErasureCoded, 1 << 20)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_secondary_piece_index_bounded_by_segments() {
        let s = setup(4);
        let refs: Vec<_> = s.secondaries.iter().collect();
        // 3000 bytes over 1024-byte segments: pieces 0..=2.
        let object = s
            .h
            .create_object(&s.primary, &refs, RedundancyType::ErasureCoded, 3000)
            .unwrap();
        s.h.seal(&object, &s.primary, 50, signatures(&s, 4)).unwrap();

        assert!(s.h.challenge(&object, &s.secondaries[2], 2).is_ok());
        let err = s.h.challenge(&object, &s.secondaries[2], 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }
}
