//! Challenge Service - challenge lifecycle and settlement
//!
//! ## Penalty
//!
//! `penalty = deposit × slash_penalty_bps / 10_000`, computed on the deposit
//! as staged in the current batch. Several failures against one provider in
//! the same sweep therefore compound.

use crate::domain::entities::{
    challenge_key, pending_key_expiry, AttestationResult, AttestationSignDoc, Challenge,
    ChallengeStatus, CHALLENGE_SEQUENCE_KEY, PENDING_KEY_PREFIX,
};
use crate::domain::errors::{ChallengeError, ChallengeResult};
use crate::domain::messages::{MsgAttest, MsgSubmitChallenge, MsgUpdateParams};
use crate::ports::inbound::{ChallengeApi, ExpirySweep};
use shared_types::state::decode_record;
use shared_types::{
    read_record, Address, BlockHeightSource, ChallengeId, ChallengeParams, Height, LedgerEvent, ParamStore,
    StateStore, StoreError, WriteBatch,
};
use sl_01_approval::{ApprovalApi, ApprovalError, SignDoc};
use sl_02_sp_registry::{SlashOutcome, StorageProviderApi};
use sl_03_object_ledger::ObjectLedgerApi;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Challenge-attestation engine.
pub struct ChallengeService<S, P, R, O, A, H>
where
    S: StateStore,
    P: ParamStore,
    R: StorageProviderApi,
    O: ObjectLedgerApi,
    A: ApprovalApi,
    H: BlockHeightSource,
{
    store: Arc<S>,
    params: Arc<P>,
    registry: Arc<R>,
    objects: Arc<O>,
    approvals: Arc<A>,
    height: Arc<H>,
}

impl<S, P, R, O, A, H> ChallengeService<S, P, R, O, A, H>
where
    S: StateStore,
    P: ParamStore,
    R: StorageProviderApi,
    O: ObjectLedgerApi,
    A: ApprovalApi,
    H: BlockHeightSource,
{
    pub fn new(
        store: Arc<S>,
        params: Arc<P>,
        registry: Arc<R>,
        objects: Arc<O>,
        approvals: Arc<A>,
        height: Arc<H>,
    ) -> Self {
        Self {
            store,
            params,
            registry,
            objects,
            approvals,
            height,
        }
    }

    fn load(&self, id: ChallengeId) -> ChallengeResult<Challenge> {
        read_record(self.store.as_ref(), &challenge_key(id))?
            .ok_or(ChallengeError::ChallengeNotFound(id))
    }

    /// Stage the terminal transition of a PENDING challenge.
    fn stage_resolution(
        &self,
        batch: &mut WriteBatch,
        challenge: &Challenge,
    ) -> ChallengeResult<()> {
        batch.delete(challenge.pending_key());
        batch.put_record(challenge_key(challenge.id), challenge)?;
        Ok(())
    }

    /// Stage the slash owed for a failed or expired challenge.
    fn stage_penalty(
        &self,
        batch: &mut WriteBatch,
        challenge: &Challenge,
        params: &ChallengeParams,
    ) -> ChallengeResult<SlashOutcome> {
        let sp = self
            .registry
            .staged_storage_provider(batch, &challenge.sp_address)?
            .ok_or(ChallengeError::SpNotFound(challenge.sp_address))?;

        let penalty = params.penalty_for(sp.deposit);
        let outcome = self
            .registry
            .plan_slash(batch, &challenge.sp_address, penalty)?;

        debug!(
            challenge_id = challenge.id,
            sp = %challenge.sp_address,
            penalty,
            remaining = outcome.remaining_deposit,
            "challenge penalty staged"
        );
        Ok(outcome)
    }
}

impl<S, P, R, O, A, H> ChallengeApi for ChallengeService<S, P, R, O, A, H>
where
    S: StateStore,
    P: ParamStore,
    R: StorageProviderApi,
    O: ObjectLedgerApi,
    A: ApprovalApi,
    H: BlockHeightSource,
{
    fn submit_challenge(&self, msg: &MsgSubmitChallenge) -> ChallengeResult<Challenge> {
        let (challenger, sp_address) = msg.validate_basic()?;

        let object = self
            .objects
            .get_object(msg.object_id)?
            .ok_or(ChallengeError::ObjectNotFound(msg.object_id))?;
        if !object.is_sealed() {
            return Err(ChallengeError::ObjectNotSealed(object.id));
        }
        if !object.is_assigned(&sp_address) {
            return Err(ChallengeError::SpNotAssigned {
                object_id: object.id,
                sp: sp_address,
            });
        }

        let params = self.params.params();
        let segments = object.segment_count(params.storage.max_segment_size);
        if u64::from(msg.piece_index) >= segments {
            return Err(ChallengeError::InvalidRequest(format!(
                "piece index {} out of range, object {} has {} segments",
                msg.piece_index, object.id, segments
            )));
        }

        let next: Option<ChallengeId> = read_record(self.store.as_ref(), CHALLENGE_SEQUENCE_KEY)?;
        let id = next.unwrap_or(1);
        let current_height = self.height.current_height();

        let challenge = Challenge {
            id,
            challenger,
            object_id: object.id,
            sp_address,
            piece_index: msg.piece_index,
            status: ChallengeStatus::Pending,
            created_at: current_height,
            expiry_height: current_height.saturating_add(params.challenge.challenge_window),
            attester: None,
            resolved_at: None,
        };

        let mut batch = WriteBatch::new();
        batch.put_record(challenge_key(id), &challenge)?;
        batch.put_record(challenge.pending_key(), &id)?;
        batch.put_record(CHALLENGE_SEQUENCE_KEY.to_vec(), &(id + 1))?;
        batch.emit(LedgerEvent::ChallengeSubmitted {
            challenge_id: id,
            object_id: object.id,
            sp_address,
            piece_index: msg.piece_index,
            expiry_height: challenge.expiry_height,
        });
        self.store.commit(batch)?;

        info!(
            challenge_id = id,
            object_id = object.id,
            sp = %sp_address,
            piece = msg.piece_index,
            expiry = challenge.expiry_height,
            "challenge submitted"
        );
        Ok(challenge)
    }

    fn attest(&self, msg: &MsgAttest) -> ChallengeResult<Challenge> {
        let attester = msg.validate_basic()?;
        let mut challenge = self.load(msg.challenge_id)?;

        if challenge.status.is_terminal() {
            debug!(challenge_id = challenge.id, status = ?challenge.status, "late attestation");
            return Err(ChallengeError::ChallengeAlreadyResolved {
                challenge_id: challenge.id,
                status: challenge.status,
            });
        }

        let current_height = self.height.current_height();
        if challenge.is_expired_at(current_height) {
            return Err(ChallengeError::ChallengeExpired {
                challenge_id: challenge.id,
                expiry_height: challenge.expiry_height,
                current_height,
            });
        }

        let params = self.params.params().challenge;
        authorize_attester(&params, &challenge, &attester)?;

        let doc = AttestationSignDoc::for_challenge(&challenge, msg.result);
        let invalid_signature = |e: ApprovalError| ChallengeError::SignatureInvalid {
            signer: attester,
            reason: e.to_string(),
        };
        let message = doc.sign_bytes().map_err(invalid_signature)?;
        self.approvals
            .check(
                &attester,
                &message,
                &msg.proof,
                challenge.expiry_height,
                current_height,
            )
            .map_err(invalid_signature)?;

        challenge.status = msg.result.resolved_status();
        challenge.attester = Some(attester);
        challenge.resolved_at = Some(current_height);

        let mut batch = WriteBatch::new();
        self.stage_resolution(&mut batch, &challenge)?;
        batch.emit(LedgerEvent::ChallengeAttested {
            challenge_id: challenge.id,
            attester,
            valid: msg.result == AttestationResult::Valid,
        });
        if challenge.status.is_penalized() {
            self.stage_penalty(&mut batch, &challenge, &params)?;
        }
        self.store.commit(batch)?;

        info!(
            challenge_id = challenge.id,
            %attester,
            status = ?challenge.status,
            "challenge attested"
        );
        Ok(challenge)
    }

    fn update_params(&self, msg: &MsgUpdateParams) -> ChallengeResult<ChallengeParams> {
        let signer = msg.validate_basic()?;
        let authority = self.params.params().authority;
        if signer != authority {
            warn!(%signer, "unauthorized challenge params update");
            return Err(ChallengeError::Unauthorized {
                signer,
                reason: "not the governance authority",
            });
        }

        // Params live outside the keyspace; only the event is committed.
        // The event goes first so a failed commit leaves the old params in
        // force. The swap itself cannot fail once validation has passed.
        let mut batch = WriteBatch::new();
        batch.emit(LedgerEvent::ChallengeParamsUpdated {
            challenge_window: msg.params.challenge_window,
            slash_penalty_bps: msg.params.slash_penalty_bps,
        });
        self.store.commit(batch)?;
        self.params.set_challenge_params(msg.params.clone())?;

        info!(
            window = msg.params.challenge_window,
            penalty_bps = msg.params.slash_penalty_bps,
            "challenge params updated"
        );
        Ok(msg.params.clone())
    }

    fn get_challenge(&self, id: ChallengeId) -> ChallengeResult<Option<Challenge>> {
        Ok(read_record(self.store.as_ref(), &challenge_key(id))?)
    }

    fn pending_challenges(&self) -> ChallengeResult<Vec<Challenge>> {
        self.store
            .scan_prefix(PENDING_KEY_PREFIX)?
            .into_iter()
            .map(|(key, value)| {
                let id: ChallengeId = decode_record(&key, &value)?;
                self.load(id)
            })
            .collect()
    }
}

/// An attestation counts only from a registered attester that is neither
/// the challenged provider nor the account that opened the challenge.
fn authorize_attester(
    params: &ChallengeParams,
    challenge: &Challenge,
    attester: &Address,
) -> ChallengeResult<()> {
    let reason = if !params.is_attester(attester) {
        "not a registered attester"
    } else if *attester == challenge.sp_address {
        "challenged provider cannot attest"
    } else if *attester == challenge.challenger {
        "challenger cannot attest"
    } else {
        return Ok(());
    };
    debug!(challenge_id = challenge.id, %attester, reason, "attestation refused");
    Err(ChallengeError::Unauthorized {
        signer: *attester,
        reason,
    })
}

impl<S, P, R, O, A, H> ExpirySweep for ChallengeService<S, P, R, O, A, H>
where
    S: StateStore,
    P: ParamStore,
    R: StorageProviderApi,
    O: ObjectLedgerApi,
    A: ApprovalApi,
    H: BlockHeightSource,
{
    fn expire_challenges(&self, height: Height) -> ChallengeResult<Vec<Challenge>> {
        let params = self.params.params().challenge;
        let mut batch = WriteBatch::new();
        let mut expired = Vec::new();

        for (key, value) in self.store.scan_prefix(PENDING_KEY_PREFIX)? {
            let expiry = pending_key_expiry(&key).ok_or_else(|| StoreError::Corrupted {
                key: String::from_utf8_lossy(&key).into_owned(),
                reason: "malformed pending index key".into(),
            })?;
            // Index is ordered by expiry; everything after is still live.
            if expiry >= height {
                break;
            }

            let id: ChallengeId = decode_record(&key, &value)?;
            let mut challenge = self.load(id)?;
            if !challenge.is_pending() {
                return Err(StoreError::Corrupted {
                    key: String::from_utf8_lossy(&key).into_owned(),
                    reason: format!("indexed challenge {id} is {:?}", challenge.status),
                }
                .into());
            }

            challenge.status = ChallengeStatus::Expired;
            challenge.resolved_at = Some(height);

            self.stage_resolution(&mut batch, &challenge)?;
            batch.emit(LedgerEvent::ChallengeExpired {
                challenge_id: challenge.id,
                sp_address: challenge.sp_address,
            });
            self.stage_penalty(&mut batch, &challenge, &params)?;
            expired.push(challenge);
        }

        if batch.is_empty() {
            return Ok(expired);
        }
        self.store.commit(batch)?;

        info!(height, count = expired.len(), "challenges expired");
        Ok(expired)
    }
}
