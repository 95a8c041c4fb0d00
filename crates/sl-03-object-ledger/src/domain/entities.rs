//! # Object Entities
//!
//! Type decisions:
//! - `secondary_sps` is ordered; for erasure-coded objects position `i`
//!   holds shard `i`.
//! - Erasure-coded objects carry one piece checksum per secondary; replica
//!   secondaries hold full copies and are checked against `checksum`.

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use shared_types::{Address, Hash, Height, ObjectId};
use sl_01_approval::{SecondarySpSignDoc, SignDoc};

/// Key prefix of object records.
pub const OBJECT_KEY_PREFIX: &[u8] = b"obj/";

/// Key holding the next object id.
pub const OBJECT_SEQUENCE_KEY: &[u8] = b"seq/object";

/// Storage key of an object record. Big-endian ids keep scans in id order.
pub fn object_key(id: ObjectId) -> Vec<u8> {
    let mut key = Vec::with_capacity(OBJECT_KEY_PREFIX.len() + 8);
    key.extend_from_slice(OBJECT_KEY_PREFIX);
    key.extend_from_slice(&id.to_be_bytes());
    key
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedundancyType {
    /// Every secondary stores a full copy.
    Replica,
    /// Every secondary stores one shard (data or parity).
    ErasureCoded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    Origin,
    CrossChain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadQuota {
    Free,
    OneGiB,
    TenGiB,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectStatus {
    Created,
    Sealed,
}

/// Per-object metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    pub id: ObjectId,
    pub owner: Address,
    pub size: u64,
    /// Integrity hash of the whole payload.
    pub checksum: Hash,
    /// Erasure-coded only: checksum of the shard held by each secondary.
    pub piece_checksums: Vec<Hash>,
    pub redundancy_type: RedundancyType,
    pub source_type: SourceType,
    pub read_quota: ReadQuota,
    pub status: ObjectStatus,
    pub primary_sp: Address,
    pub secondary_sps: Vec<Address>,
    pub created_at: Height,
}

impl Object {
    /// Primary or secondary.
    pub fn is_assigned(&self, sp: &Address) -> bool {
        self.assigned_sps().any(|assigned| assigned == sp)
    }

    /// Primary first, then secondaries in order.
    pub fn assigned_sps(&self) -> impl Iterator<Item = &Address> {
        std::iter::once(&self.primary_sp).chain(self.secondary_sps.iter())
    }

    pub fn is_sealed(&self) -> bool {
        self.status == ObjectStatus::Sealed
    }

    /// Checksum a secondary SP must co-sign, or `None` if `sp` is not a
    /// secondary of this object.
    pub fn expected_checksum(&self, sp: &Address) -> Option<Hash> {
        let index = self.secondary_sps.iter().position(|s| s == sp)?;
        match self.redundancy_type {
            RedundancyType::Replica => Some(self.checksum),
            RedundancyType::ErasureCoded => self.piece_checksums.get(index).copied(),
        }
    }

    /// Number of addressable segments. An empty object still has one.
    pub fn segment_count(&self, max_segment_size: u64) -> u64 {
        if max_segment_size == 0 {
            return 1;
        }
        self.size.div_ceil(max_segment_size).max(1)
    }
}

/// What the primary SP signs to approve a seal.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSealSignDoc {
    pub object_id: ObjectId,
    #[serde_as(as = "Hex")]
    pub checksum: Hash,
    pub expired_height: Height,
}

impl SignDoc for ObjectSealSignDoc {}

/// A secondary SP's co-signature over its [`SecondarySpSignDoc`].
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondarySignature {
    pub sign_doc: SecondarySpSignDoc,
    #[serde_as(as = "Hex")]
    pub signature: Vec<u8>,
}
