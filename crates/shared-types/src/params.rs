//! # Module Parameters
//!
//! Policy constants supplied by the parameter store. No numeric policy is
//! built into the subsystems: every value below comes from the host's
//! governance-controlled store (or the runtime's TOML configuration).

use crate::entities::{Address, Amount};
use crate::errors::ParamsError;
use serde::{Deserialize, Serialize};

/// Denominator for basis-point ratios (10_000 bps = 100%).
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Storage provider registry parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpParams {
    /// Minimum bonded deposit for an ACTIVE storage provider.
    pub min_deposit: Amount,
}

/// Object ledger parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageParams {
    /// Segment size used to address pieces of an object.
    pub max_segment_size: u64,
    /// Distinct secondary co-signatures needed to seal an erasure-coded object.
    pub ec_min_secondary_signatures: u32,
}

/// Challenge engine parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeParams {
    /// Blocks a storage provider has to answer a challenge.
    pub challenge_window: u64,
    /// Share of the current deposit slashed on a failed challenge, in basis points.
    pub slash_penalty_bps: u32,
    /// Accounts whose attestations settle challenges.
    pub attesters: Vec<Address>,
}

/// Full parameter set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub sp: SpParams,
    pub storage: StorageParams,
    pub challenge: ChallengeParams,
    /// Governance account allowed to update challenge parameters.
    pub authority: Address,
}

impl StorageParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.max_segment_size == 0 {
            return Err(ParamsError::Invalid {
                name: "storage.max_segment_size",
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }
}

impl ChallengeParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.challenge_window == 0 {
            return Err(ParamsError::Invalid {
                name: "challenge.challenge_window",
                reason: "must be positive".into(),
            });
        }
        if u128::from(self.slash_penalty_bps) > BPS_DENOMINATOR {
            return Err(ParamsError::Invalid {
                name: "challenge.slash_penalty_bps",
                reason: format!("{} exceeds {}", self.slash_penalty_bps, BPS_DENOMINATOR),
            });
        }
        if self.attesters.is_empty() {
            return Err(ParamsError::Invalid {
                name: "challenge.attesters",
                reason: "at least one attester is required".into(),
            });
        }
        let mut seen = std::collections::BTreeSet::new();
        if let Some(dup) = self.attesters.iter().find(|a| !seen.insert(**a)) {
            return Err(ParamsError::Invalid {
                name: "challenge.attesters",
                reason: format!("duplicate attester {dup}"),
            });
        }
        Ok(())
    }

    pub fn is_attester(&self, address: &Address) -> bool {
        self.attesters.contains(address)
    }

    /// Penalty owed on a failed challenge for the given deposit.
    pub fn penalty_for(&self, deposit: Amount) -> Amount {
        // Divide first so the product cannot overflow for large deposits.
        let bps = u128::from(self.slash_penalty_bps);
        (deposit / BPS_DENOMINATOR) * bps + (deposit % BPS_DENOMINATOR) * bps / BPS_DENOMINATOR
    }
}

impl Params {
    pub fn validate(&self) -> Result<(), ParamsError> {
        self.storage.validate()?;
        self.challenge.validate()
    }
}

/// Read access to the parameter store, plus the single governance write.
pub trait ParamStore: Send + Sync {
    /// Snapshot of the current parameters.
    fn params(&self) -> Params;

    /// Replace the challenge parameters. Only reachable through the
    /// governance update message.
    fn set_challenge_params(&self, params: ChallengeParams) -> Result<(), ParamsError>;
}
