//! # Ledger Events
//!
//! Typed events emitted by the subsystems. Events ride inside the
//! [`WriteBatch`](crate::WriteBatch) of the operation that produced them, so
//! a rejected operation never emits anything.

use crate::entities::{Address, Amount, ChallengeId, Height, ObjectId};
use serde::{Deserialize, Serialize};

/// Every event the storage ledger can emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A storage provider bonded its initial deposit.
    StorageProviderBonded {
        sp_address: Address,
        funding_address: Address,
        deposit: Amount,
    },
    /// A storage provider's description changed.
    StorageProviderEdited { sp_address: Address },
    /// Deposit top-up.
    StorageProviderDeposited {
        sp_address: Address,
        amount: Amount,
        new_deposit: Amount,
    },
    /// Deposit reduced by a penalty.
    StorageProviderSlashed {
        sp_address: Address,
        amount: Amount,
        remaining_deposit: Amount,
    },
    /// Deposit fell below the minimum bond.
    StorageProviderJailed { sp_address: Address, deposit: Amount },
    /// Object registered in CREATED status.
    ObjectCreated {
        object_id: ObjectId,
        owner: Address,
        primary_sp: Address,
    },
    /// Object transitioned to SEALED.
    ObjectSealed { object_id: ObjectId, height: Height },
    /// New pending challenge.
    ChallengeSubmitted {
        challenge_id: ChallengeId,
        object_id: ObjectId,
        sp_address: Address,
        piece_index: u32,
        expiry_height: Height,
    },
    /// Challenge resolved by an attestation.
    ChallengeAttested {
        challenge_id: ChallengeId,
        attester: Address,
        valid: bool,
    },
    /// Challenge expired without an attestation.
    ChallengeExpired {
        challenge_id: ChallengeId,
        sp_address: Address,
    },
    /// Challenge parameters replaced by governance.
    ChallengeParamsUpdated {
        challenge_window: u64,
        slash_penalty_bps: u32,
    },
}

impl LedgerEvent {
    /// Stable event name, used as the log target and by hosts for indexing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StorageProviderBonded { .. } => "sp.bonded",
            Self::StorageProviderEdited { .. } => "sp.edited",
            Self::StorageProviderDeposited { .. } => "sp.deposited",
            Self::StorageProviderSlashed { .. } => "sp.slashed",
            Self::StorageProviderJailed { .. } => "sp.jailed",
            Self::ObjectCreated { .. } => "storage.object_created",
            Self::ObjectSealed { .. } => "storage.object_sealed",
            Self::ChallengeSubmitted { .. } => "challenge.submitted",
            Self::ChallengeAttested { .. } => "challenge.attested",
            Self::ChallengeExpired { .. } => "challenge.expired",
            Self::ChallengeParamsUpdated { .. } => "challenge.params_updated",
        }
    }
}
