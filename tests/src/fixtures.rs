//! Shared harness for end-to-end flows.

use k256::ecdsa::SigningKey;
use ledger_runtime::{Command, CommandResult, LedgerError, LedgerRuntime, TomlParamsProvider};
use shared_types::{Address, Amount, Hash, Height, InMemoryStateStore, ManualHeight};
use sl_01_approval::testing::{generate_keypair, sign_doc};
use sl_01_approval::{Approval, SecondarySpSignDoc};
use sl_02_sp_registry::{Description, MsgCreateStorageProvider, StorageProvider, StorageProviderApi};
use sl_03_object_ledger::{
    MsgCreateObject, MsgSealObject, Object, ObjectSealSignDoc, ReadQuota, RedundancyType,
    SecondarySignature, SourceType,
};
use sl_04_challenge::{AttestationResult, AttestationSignDoc, Challenge, MsgAttest, MsgSubmitChallenge};
use std::sync::Arc;

pub const MIN_DEPOSIT: u64 = 950;
pub const EC_THRESHOLD: u32 = 4;
pub const CHALLENGE_WINDOW: u64 = 10;
pub const PENALTY_BPS: u32 = 1_000;
pub const SEGMENT_SIZE: u64 = 1024;
pub const OBJECT_CHECKSUM: Hash = [0xC5; 32];

pub fn authority() -> Address {
    Address::new([0xEE; 20])
}

pub fn config_toml(attester: &Address) -> String {
    format!(
        r#"
        [sp]
        min_deposit = {MIN_DEPOSIT}

        [storage]
        max_segment_size = {SEGMENT_SIZE}
        ec_min_secondary_signatures = {EC_THRESHOLD}

        [challenge]
        challenge_window = {CHALLENGE_WINDOW}
        slash_penalty_bps = {PENALTY_BPS}
        attesters = ["{attester}"]

        [governance]
        authority = "{}"
        "#,
        authority()
    )
}

/// A storage provider key pair.
pub struct Sp {
    pub key: SigningKey,
    pub address: Address,
}

impl Sp {
    pub fn generate() -> Self {
        let (key, address) = generate_keypair();
        Self { key, address }
    }
}

pub struct Harness {
    pub runtime: LedgerRuntime<InMemoryStateStore, ManualHeight>,
    pub store: Arc<InMemoryStateStore>,
    pub height: Arc<ManualHeight>,
    /// The single authorized attester.
    pub attester: Sp,
}

impl Harness {
    pub fn new() -> Self {
        let attester = Sp::generate();
        let config =
            TomlParamsProvider::parse(&config_toml(&attester.address)).expect("valid test config");
        let store = Arc::new(InMemoryStateStore::new());
        let height = Arc::new(ManualHeight::new(1));
        let runtime = LedgerRuntime::new(
            store.clone(),
            Arc::new(config.param_store().expect("valid params")),
            height.clone(),
        );
        Self {
            runtime,
            store,
            height,
            attester,
        }
    }

    pub fn set_height(&self, height: Height) {
        self.height.set(height);
    }

    pub fn bond(&self, sp: &Sp, deposit: Amount) -> StorageProvider {
        let result = self
            .runtime
            .dispatch(Command::CreateStorageProvider(MsgCreateStorageProvider {
                creator: sp.address.to_hex(),
                sp_address: sp.address.to_hex(),
                funding_address: sp.address.to_hex(),
                description: Description::new(format!("sp-{}", sp.address)),
                deposit,
            }))
            .expect("bonding succeeds");
        match result {
            CommandResult::StorageProvider(p) => p,
            other => panic!("unexpected result {other:?}"),
        }
    }

    pub fn provider(&self, sp: &Sp) -> StorageProvider {
        self.runtime
            .registry()
            .get_storage_provider(&sp.address)
            .expect("store readable")
            .expect("provider exists")
    }

    pub fn create_object(
        &self,
        primary: &Sp,
        secondaries: &[&Sp],
        redundancy_type: RedundancyType,
        size: u64,
    ) -> Result<Object, LedgerError> {
        let piece_checksums = match redundancy_type {
            RedundancyType::Replica => vec![],
            RedundancyType::ErasureCoded => (0..secondaries.len()).map(piece_checksum).collect(),
        };
        let msg = MsgCreateObject {
            owner: Address::new([0x0A; 20]).to_hex(),
            size,
            checksum: OBJECT_CHECKSUM,
            piece_checksums,
            redundancy_type,
            source_type: SourceType::Origin,
            read_quota: ReadQuota::Free,
            primary_sp: primary.address.to_hex(),
            secondary_sps: secondaries.iter().map(|s| s.address.to_hex()).collect(),
        };
        match self.runtime.dispatch(Command::CreateObject(msg))? {
            CommandResult::Object(o) => Ok(o),
            other => panic!("unexpected result {other:?}"),
        }
    }

    pub fn seal(
        &self,
        object: &Object,
        primary: &Sp,
        expired_height: Height,
        secondary_signatures: Vec<SecondarySignature>,
    ) -> Result<Object, LedgerError> {
        let msg = MsgSealObject {
            object_id: object.id,
            approval: seal_approval(object, primary, expired_height),
            secondary_signatures,
        };
        match self.runtime.dispatch(Command::SealObject(msg))? {
            CommandResult::Object(o) => Ok(o),
            other => panic!("unexpected result {other:?}"),
        }
    }

    pub fn challenge(
        &self,
        object: &Object,
        sp: &Sp,
        piece_index: u32,
    ) -> Result<Challenge, LedgerError> {
        let msg = MsgSubmitChallenge {
            challenger: Address::new([0xCC; 20]).to_hex(),
            object_id: object.id,
            sp_address: sp.address.to_hex(),
            piece_index,
        };
        match self.runtime.dispatch(Command::SubmitChallenge(msg))? {
            CommandResult::Challenge(c) => Ok(c),
            other => panic!("unexpected result {other:?}"),
        }
    }

    pub fn attest(
        &self,
        challenge: &Challenge,
        attester: &Sp,
        result: AttestationResult,
    ) -> Result<Challenge, LedgerError> {
        let doc = AttestationSignDoc::for_challenge(challenge, result);
        let msg = MsgAttest {
            attester: attester.address.to_hex(),
            challenge_id: challenge.id,
            result,
            proof: sign_doc(&attester.key, &doc),
        };
        match self.runtime.dispatch(Command::Attest(msg))? {
            CommandResult::Challenge(c) => Ok(c),
            other => panic!("unexpected result {other:?}"),
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// Shard checksum held by the `i`-th secondary of an erasure-coded object.
pub fn piece_checksum(i: usize) -> Hash {
    [i as u8 + 1; 32]
}

pub fn seal_approval(object: &Object, primary: &Sp, expired_height: Height) -> Approval {
    let doc = ObjectSealSignDoc {
        object_id: object.id,
        checksum: object.checksum,
        expired_height,
    };
    Approval::new(expired_height, sign_doc(&primary.key, &doc))
}

pub fn co_signature(sp: &Sp, checksum: Hash) -> SecondarySignature {
    let doc = SecondarySpSignDoc::new(sp.address, checksum);
    SecondarySignature {
        signature: sign_doc(&sp.key, &doc),
        sign_doc: doc,
    }
}
