//! # Challenge Messages

use super::entities::AttestationResult;
use super::errors::{ChallengeError, ChallengeResult};
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use shared_types::{Address, ChallengeId, ChallengeParams, ObjectId};

fn parse_address(field: &'static str, value: &str) -> ChallengeResult<Address> {
    Address::from_hex(value).map_err(|source| ChallengeError::InvalidAddress { field, source })
}

/// Challenge `sp_address` to prove it still holds `piece_index` of an object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSubmitChallenge {
    pub challenger: String,
    pub object_id: ObjectId,
    pub sp_address: String,
    pub piece_index: u32,
}

impl MsgSubmitChallenge {
    /// Returns `(challenger, sp_address)`.
    pub fn validate_basic(&self) -> ChallengeResult<(Address, Address)> {
        let challenger = parse_address("challenger", &self.challenger)?;
        let sp_address = parse_address("sp", &self.sp_address)?;
        Ok((challenger, sp_address))
    }
}

/// Resolve a pending challenge.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgAttest {
    pub attester: String,
    pub challenge_id: ChallengeId,
    pub result: AttestationResult,
    /// Attester's signature over the challenge's
    /// [`AttestationSignDoc`](super::entities::AttestationSignDoc).
    #[serde_as(as = "Hex")]
    pub proof: Vec<u8>,
}

impl MsgAttest {
    pub fn validate_basic(&self) -> ChallengeResult<Address> {
        parse_address("attester", &self.attester)
    }
}

/// Replace the challenge parameters. Governance only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateParams {
    pub authority: String,
    pub params: ChallengeParams,
}

impl MsgUpdateParams {
    pub fn validate_basic(&self) -> ChallengeResult<Address> {
        let authority = parse_address("authority", &self.authority)?;
        self.params.validate()?;
        Ok(authority)
    }
}
