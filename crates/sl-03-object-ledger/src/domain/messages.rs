//! # Object Messages

use super::entities::{ReadQuota, RedundancyType, SecondarySignature, SourceType};
use super::errors::{ObjectError, ObjectResult};
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use shared_types::{Address, Hash, ObjectId};
use sl_01_approval::Approval;
use std::collections::BTreeSet;

/// Register a new object in CREATED status.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateObject {
    pub owner: String,
    pub size: u64,
    #[serde_as(as = "Hex")]
    pub checksum: Hash,
    #[serde_as(as = "Vec<Hex>")]
    #[serde(default)]
    pub piece_checksums: Vec<Hash>,
    pub redundancy_type: RedundancyType,
    pub source_type: SourceType,
    pub read_quota: ReadQuota,
    pub primary_sp: String,
    #[serde(default)]
    pub secondary_sps: Vec<String>,
}

/// [`MsgCreateObject`] after stateless validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidCreateObject {
    pub owner: Address,
    pub primary_sp: Address,
    pub secondary_sps: Vec<Address>,
}

fn parse_sp(value: &str) -> ObjectResult<Address> {
    Address::from_hex(value).map_err(|source| ObjectError::InvalidAddress { field: "sp", source })
}

impl MsgCreateObject {
    pub fn validate_basic(&self) -> ObjectResult<ValidCreateObject> {
        let owner = Address::from_hex(&self.owner)
            .map_err(|source| ObjectError::InvalidAddress { field: "owner", source })?;

        let primary_sp = parse_sp(&self.primary_sp)?;
        let secondary_sps = self
            .secondary_sps
            .iter()
            .map(|sp| parse_sp(sp))
            .collect::<ObjectResult<Vec<_>>>()?;

        let mut seen = BTreeSet::from([primary_sp]);
        if let Some(dup) = secondary_sps.iter().find(|sp| !seen.insert(**sp)) {
            return Err(ObjectError::InvalidRequest(format!(
                "storage provider {dup} assigned twice"
            )));
        }

        let secondaries = secondary_sps.len();
        match self.redundancy_type {
            RedundancyType::Replica if !self.piece_checksums.is_empty() => {
                return Err(ObjectError::InvalidRequest(
                    "replica objects carry no piece checksums".into(),
                ));
            }
            RedundancyType::ErasureCoded if self.piece_checksums.len() != secondaries => {
                return Err(ObjectError::InvalidRequest(format!(
                    "expected {secondaries} piece checksums, got {}",
                    self.piece_checksums.len()
                )));
            }
            _ => {}
        }

        Ok(ValidCreateObject {
            owner,
            primary_sp,
            secondary_sps,
        })
    }
}

/// Seal an object with the primary SP's approval and secondary co-signatures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSealObject {
    pub object_id: ObjectId,
    pub approval: Approval,
    #[serde(default)]
    pub secondary_signatures: Vec<SecondarySignature>,
}
