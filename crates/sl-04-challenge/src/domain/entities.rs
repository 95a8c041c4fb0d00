//! # Challenge Entities
//!
//! Keyspace:
//! - `chal/<id>`: challenge records, id order.
//! - `chal_pending/<expiry><id>`: index of PENDING challenges, ascending
//!   `(expiry_height, id)`. An entry exists iff the challenge is PENDING.
//! - `seq/challenge`: next challenge id.

use serde::{Deserialize, Serialize};
use shared_types::{Address, ChallengeId, Height, ObjectId};
use sl_01_approval::SignDoc;

pub const CHALLENGE_KEY_PREFIX: &[u8] = b"chal/";
pub const PENDING_KEY_PREFIX: &[u8] = b"chal_pending/";
pub const CHALLENGE_SEQUENCE_KEY: &[u8] = b"seq/challenge";

pub fn challenge_key(id: ChallengeId) -> Vec<u8> {
    let mut key = Vec::with_capacity(CHALLENGE_KEY_PREFIX.len() + 8);
    key.extend_from_slice(CHALLENGE_KEY_PREFIX);
    key.extend_from_slice(&id.to_be_bytes());
    key
}

pub fn pending_key(expiry_height: Height, id: ChallengeId) -> Vec<u8> {
    let mut key = Vec::with_capacity(PENDING_KEY_PREFIX.len() + 16);
    key.extend_from_slice(PENDING_KEY_PREFIX);
    key.extend_from_slice(&expiry_height.to_be_bytes());
    key.extend_from_slice(&id.to_be_bytes());
    key
}

/// Expiry height encoded in a pending index key.
pub fn pending_key_expiry(key: &[u8]) -> Option<Height> {
    let rest = key.strip_prefix(PENDING_KEY_PREFIX)?;
    let bytes: [u8; 8] = rest.get(..8)?.try_into().ok()?;
    Some(Height::from_be_bytes(bytes))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeStatus {
    Pending,
    AttestedValid,
    AttestedInvalid,
    Expired,
}

impl ChallengeStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Terminal outcomes that cost the provider part of its deposit.
    pub fn is_penalized(self) -> bool {
        matches!(self, Self::AttestedInvalid | Self::Expired)
    }
}

/// Verdict carried by an attestation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttestationResult {
    Valid,
    Invalid,
}

impl AttestationResult {
    pub fn resolved_status(self) -> ChallengeStatus {
        match self {
            Self::Valid => ChallengeStatus::AttestedValid,
            Self::Invalid => ChallengeStatus::AttestedInvalid,
        }
    }
}

/// Challenge against one piece held by one provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub challenger: Address,
    pub object_id: ObjectId,
    pub sp_address: Address,
    pub piece_index: u32,
    pub status: ChallengeStatus,
    pub created_at: Height,
    /// Last height at which an attestation is accepted.
    pub expiry_height: Height,
    pub attester: Option<Address>,
    pub resolved_at: Option<Height>,
}

impl Challenge {
    pub fn is_pending(&self) -> bool {
        self.status == ChallengeStatus::Pending
    }

    /// Past its expiry at `height` (strictly).
    pub fn is_expired_at(&self, height: Height) -> bool {
        height > self.expiry_height
    }

    pub fn pending_key(&self) -> Vec<u8> {
        pending_key(self.expiry_height, self.id)
    }
}

/// What an attester signs. Binds the verdict to the exact
/// `(challenge, object, provider, piece)` tuple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationSignDoc {
    pub challenge_id: ChallengeId,
    pub object_id: ObjectId,
    pub sp_address: Address,
    pub piece_index: u32,
    pub result: AttestationResult,
}

impl AttestationSignDoc {
    pub fn for_challenge(challenge: &Challenge, result: AttestationResult) -> Self {
        Self {
            challenge_id: challenge.id,
            object_id: challenge.object_id,
            sp_address: challenge.sp_address,
            piece_index: challenge.piece_index,
            result,
        }
    }
}

impl SignDoc for AttestationSignDoc {}
