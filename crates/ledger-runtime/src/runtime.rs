//! # Ledger Runtime
//!
//! Owns one instance of each subsystem, all sharing the same state store,
//! parameter store and height source.

use crate::command::{Command, CommandResult};
use crate::error::LedgerError;
use shared_types::{BlockHeightSource, Height, StateStore, StaticParamStore};
use sl_01_approval::ApprovalVerifier;
use sl_02_sp_registry::{RegistryService, StorageProviderApi};
use sl_03_object_ledger::{ObjectLedgerApi, ObjectService};
use sl_04_challenge::{Challenge, ChallengeApi, ChallengeService, ExpirySweep};
use std::sync::Arc;
use tracing::{debug, info_span, warn};

pub type Registry<S> = RegistryService<S, StaticParamStore>;
pub type Objects<S, H> = ObjectService<S, StaticParamStore, Registry<S>, ApprovalVerifier, H>;
pub type Challenges<S, H> =
    ChallengeService<S, StaticParamStore, Registry<S>, Objects<S, H>, ApprovalVerifier, H>;

pub struct LedgerRuntime<S: StateStore, H: BlockHeightSource> {
    registry: Arc<Registry<S>>,
    objects: Arc<Objects<S, H>>,
    challenges: Arc<Challenges<S, H>>,
}

impl<S: StateStore, H: BlockHeightSource> LedgerRuntime<S, H> {
    pub fn new(store: Arc<S>, params: Arc<StaticParamStore>, height: Arc<H>) -> Self {
        let approvals = Arc::new(ApprovalVerifier::default());
        let registry = Arc::new(RegistryService::new(
            Arc::clone(&store),
            Arc::clone(&params),
        ));
        let objects = Arc::new(ObjectService::new(
            Arc::clone(&store),
            Arc::clone(&params),
            Arc::clone(&registry),
            Arc::clone(&approvals),
            Arc::clone(&height),
        ));
        let challenges = Arc::new(ChallengeService::new(
            store,
            params,
            Arc::clone(&registry),
            Arc::clone(&objects),
            approvals,
            height,
        ));

        Self {
            registry,
            objects,
            challenges,
        }
    }

    /// Execute one command. A failed command leaves state untouched.
    pub fn dispatch(&self, command: Command) -> Result<CommandResult, LedgerError> {
        let span = info_span!("dispatch", msg = command.type_url(), route = command.route());
        let _guard = span.enter();

        let result = match command {
            Command::CreateStorageProvider(msg) => self
                .registry
                .create_storage_provider(&msg)
                .map(CommandResult::StorageProvider)
                .map_err(LedgerError::from),
            Command::EditStorageProvider(msg) => self
                .registry
                .edit_storage_provider(&msg)
                .map(CommandResult::StorageProvider)
                .map_err(LedgerError::from),
            Command::Deposit(msg) => self
                .registry
                .deposit(&msg)
                .map(CommandResult::StorageProvider)
                .map_err(LedgerError::from),
            Command::CreateObject(msg) => self
                .objects
                .create_object(&msg)
                .map(CommandResult::Object)
                .map_err(LedgerError::from),
            Command::SealObject(msg) => self
                .objects
                .seal_object(&msg)
                .map(CommandResult::Object)
                .map_err(LedgerError::from),
            Command::SubmitChallenge(msg) => self
                .challenges
                .submit_challenge(&msg)
                .map(CommandResult::Challenge)
                .map_err(LedgerError::from),
            Command::Attest(msg) => self
                .challenges
                .attest(&msg)
                .map(CommandResult::Challenge)
                .map_err(LedgerError::from),
            Command::UpdateParams(msg) => self
                .challenges
                .update_params(&msg)
                .map(CommandResult::ChallengeParams)
                .map_err(LedgerError::from),
        };

        if let Err(e) = &result {
            debug!(kind = %e.kind(), error = %e, "command rejected");
        }
        result
    }

    /// Height hook: settle every challenge whose expiry lies before `height`.
    pub fn end_block(&self, height: Height) -> Result<Vec<Challenge>, LedgerError> {
        let expired = self
            .challenges
            .expire_challenges(height)
            .inspect_err(|e| warn!(height, error = %e, "expiry sweep failed"))?;
        Ok(expired)
    }

    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    pub fn objects(&self) -> &Objects<S, H> {
        &self.objects
    }

    pub fn challenges(&self) -> &Challenges<S, H> {
        &self.challenges
    }
}
