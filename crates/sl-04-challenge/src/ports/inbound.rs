//! # Inbound Ports
//!
//! Two driving sides: message dispatch ([`ChallengeApi`]) and the host's
//! block-height hook ([`ExpirySweep`]).

use crate::domain::entities::Challenge;
use crate::domain::errors::ChallengeResult;
use crate::domain::messages::{MsgAttest, MsgSubmitChallenge, MsgUpdateParams};
use shared_types::{ChallengeId, ChallengeParams, Height};

/// Challenge-attestation API.
pub trait ChallengeApi: Send + Sync {
    /// Open a PENDING challenge against a sealed object's provider.
    fn submit_challenge(&self, msg: &MsgSubmitChallenge) -> ChallengeResult<Challenge>;

    /// Resolve a PENDING challenge. An invalid verdict slashes the provider.
    fn attest(&self, msg: &MsgAttest) -> ChallengeResult<Challenge>;

    /// Replace challenge parameters. Only the governance authority may call.
    fn update_params(&self, msg: &MsgUpdateParams) -> ChallengeResult<ChallengeParams>;

    fn get_challenge(&self, id: ChallengeId) -> ChallengeResult<Option<Challenge>>;

    /// PENDING challenges in ascending `(expiry_height, id)` order.
    fn pending_challenges(&self) -> ChallengeResult<Vec<Challenge>>;
}

/// Height-driven settlement of unanswered challenges.
pub trait ExpirySweep: Send + Sync {
    /// Expire and slash every PENDING challenge with `expiry_height < height`.
    ///
    /// Returns the challenges expired by this call. Re-running at the same
    /// height returns nothing and changes nothing.
    fn expire_challenges(&self, height: Height) -> ChallengeResult<Vec<Challenge>>;
}
