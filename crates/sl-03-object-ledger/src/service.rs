//! Object Service - creation and sealing
//!
//! Sealing runs every check before staging anything, so a rejected seal
//! leaves the object in CREATED with no event emitted.

use crate::domain::entities::{
    object_key, Object, ObjectSealSignDoc, ObjectStatus, RedundancyType, OBJECT_SEQUENCE_KEY,
};
use crate::domain::errors::{ObjectError, ObjectResult};
use crate::domain::messages::{MsgCreateObject, MsgSealObject};
use crate::ports::inbound::ObjectLedgerApi;
use shared_types::{
    read_record, Address, BlockHeightSource, Height, LedgerEvent, ObjectId, ParamStore, StateStore,
    WriteBatch,
};
use sl_01_approval::{ApprovalApi, ApprovalError, SignDoc};
use sl_02_sp_registry::StorageProviderApi;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Object ledger backed by the state store.
pub struct ObjectService<S, P, R, A, H>
where
    S: StateStore,
    P: ParamStore,
    R: StorageProviderApi,
    A: ApprovalApi,
    H: BlockHeightSource,
{
    store: Arc<S>,
    params: Arc<P>,
    registry: Arc<R>,
    approvals: Arc<A>,
    height: Arc<H>,
}

impl<S, P, R, A, H> ObjectService<S, P, R, A, H>
where
    S: StateStore,
    P: ParamStore,
    R: StorageProviderApi,
    A: ApprovalApi,
    H: BlockHeightSource,
{
    pub fn new(
        store: Arc<S>,
        params: Arc<P>,
        registry: Arc<R>,
        approvals: Arc<A>,
        height: Arc<H>,
    ) -> Self {
        Self {
            store,
            params,
            registry,
            approvals,
            height,
        }
    }

    fn next_object_id(&self) -> ObjectResult<ObjectId> {
        let next: Option<ObjectId> = read_record(self.store.as_ref(), OBJECT_SEQUENCE_KEY)?;
        Ok(next.unwrap_or(1))
    }

    fn ensure_active(&self, sp: &Address) -> ObjectResult<()> {
        match self.registry.get_storage_provider(sp)? {
            None => Err(ObjectError::SpNotFound(*sp)),
            Some(provider) if !provider.is_active() => Err(ObjectError::SpNotActive(*sp)),
            Some(_) => Ok(()),
        }
    }

    /// Verify the secondary co-signatures and return how many distinct SPs
    /// signed.
    fn count_secondary_signatures(
        &self,
        object: &Object,
        msg: &MsgSealObject,
        current_height: Height,
    ) -> ObjectResult<u32> {
        let mut signers = BTreeSet::new();

        for entry in &msg.secondary_signatures {
            let sp = entry.sign_doc.sp_address;
            let expected = object.expected_checksum(&sp).ok_or(ObjectError::SpNotAssigned {
                object_id: object.id,
                sp,
            })?;

            if entry.sign_doc.checksum != expected {
                debug!(object_id = object.id, %sp, "secondary checksum mismatch");
                return Err(ObjectError::ChecksumMismatch {
                    object_id: object.id,
                    sp,
                });
            }

            let message = entry.sign_doc.sign_bytes().map_err(|e| signature_error(sp, e))?;
            self.approvals
                .check(
                    &sp,
                    &message,
                    &entry.signature,
                    msg.approval.expired_height,
                    current_height,
                )
                .map_err(|e| signature_error(sp, e))?;

            signers.insert(sp);
        }

        Ok(signers.len() as u32)
    }
}

fn signature_error(signer: Address, err: ApprovalError) -> ObjectError {
    ObjectError::SignatureInvalid {
        signer,
        reason: err.to_string(),
    }
}

impl<S, P, R, A, H> ObjectLedgerApi for ObjectService<S, P, R, A, H>
where
    S: StateStore,
    P: ParamStore,
    R: StorageProviderApi,
    A: ApprovalApi,
    H: BlockHeightSource,
{
    fn create_object(&self, msg: &MsgCreateObject) -> ObjectResult<Object> {
        let valid = msg.validate_basic()?;

        if msg.redundancy_type == RedundancyType::ErasureCoded {
            let need = self.params.params().storage.ec_min_secondary_signatures;
            if (valid.secondary_sps.len() as u64) < u64::from(need) {
                return Err(ObjectError::InvalidRequest(format!(
                    "erasure-coded object needs at least {need} secondary SPs"
                )));
            }
        }

        self.ensure_active(&valid.primary_sp)?;
        for sp in &valid.secondary_sps {
            self.ensure_active(sp)?;
        }

        let id = self.next_object_id()?;
        let object = Object {
            id,
            owner: valid.owner,
            size: msg.size,
            checksum: msg.checksum,
            piece_checksums: msg.piece_checksums.clone(),
            redundancy_type: msg.redundancy_type,
            source_type: msg.source_type,
            read_quota: msg.read_quota,
            status: ObjectStatus::Created,
            primary_sp: valid.primary_sp,
            secondary_sps: valid.secondary_sps,
            created_at: self.height.current_height(),
        };

        let mut batch = WriteBatch::new();
        batch.put_record(object_key(id), &object)?;
        batch.put_record(OBJECT_SEQUENCE_KEY.to_vec(), &(id + 1))?;
        batch.emit(LedgerEvent::ObjectCreated {
            object_id: id,
            owner: object.owner,
            primary_sp: object.primary_sp,
        });
        self.store.commit(batch)?;

        info!(
            object_id = id,
            owner = %object.owner,
            primary = %object.primary_sp,
            secondaries = object.secondary_sps.len(),
            "object created"
        );
        Ok(object)
    }

    fn seal_object(&self, msg: &MsgSealObject) -> ObjectResult<Object> {
        let key = object_key(msg.object_id);
        let mut object: Object = read_record(self.store.as_ref(), &key)?
            .ok_or(ObjectError::ObjectNotFound(msg.object_id))?;

        if object.is_sealed() {
            return Err(ObjectError::InvalidRequest(format!(
                "object {} already sealed",
                object.id
            )));
        }

        let current_height = self.height.current_height();
        if !msg.approval.is_live_at(current_height) {
            debug!(
                object_id = object.id,
                expired_height = msg.approval.expired_height,
                current_height,
                "seal approval expired"
            );
            return Err(ObjectError::SealExpired {
                expired_height: msg.approval.expired_height,
                current_height,
            });
        }

        let doc = ObjectSealSignDoc {
            object_id: object.id,
            checksum: object.checksum,
            expired_height: msg.approval.expired_height,
        };
        let message = doc
            .sign_bytes()
            .map_err(|e| signature_error(object.primary_sp, e))?;
        self.approvals
            .check_approval(&object.primary_sp, &message, &msg.approval, current_height)
            .map_err(|e| signature_error(object.primary_sp, e))?;

        let signed = self.count_secondary_signatures(&object, msg, current_height)?;
        if object.redundancy_type == RedundancyType::ErasureCoded {
            let need = self.params.params().storage.ec_min_secondary_signatures;
            if signed < need {
                return Err(ObjectError::InsufficientSignatures { have: signed, need });
            }
        }

        object.status = ObjectStatus::Sealed;

        let mut batch = WriteBatch::new();
        batch.put_record(key, &object)?;
        batch.emit(LedgerEvent::ObjectSealed {
            object_id: object.id,
            height: current_height,
        });
        self.store.commit(batch)?;

        info!(
            object_id = object.id,
            height = current_height,
            co_signatures = signed,
            "object sealed"
        );
        Ok(object)
    }

    fn get_object(&self, id: ObjectId) -> ObjectResult<Option<Object>> {
        Ok(read_record(self.store.as_ref(), &object_key(id))?)
    }
}
