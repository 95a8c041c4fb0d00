//! Registry Service - core business logic
//!
//! Every operation reads through the state store, validates, stages its
//! writes in one [`WriteBatch`] and commits once, so a rejected request
//! leaves the store untouched.

use crate::domain::entities::{sp_key, SpStatus, StorageProvider, SP_KEY_PREFIX};
use crate::domain::errors::{RegistryError, RegistryResult};
use crate::domain::messages::{MsgCreateStorageProvider, MsgDeposit, MsgEditStorageProvider};
use crate::ports::inbound::{SlashOutcome, StorageProviderApi};
use shared_types::state::decode_record;
use shared_types::{read_record, Address, Amount, LedgerEvent, ParamStore, StateStore, WriteBatch};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Storage provider registry backed by the ledger state store.
pub struct RegistryService<S: StateStore, P: ParamStore> {
    store: Arc<S>,
    params: Arc<P>,
}

impl<S: StateStore, P: ParamStore> Clone for RegistryService<S, P> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            params: Arc::clone(&self.params),
        }
    }
}

impl<S: StateStore, P: ParamStore> RegistryService<S, P> {
    pub fn new(store: Arc<S>, params: Arc<P>) -> Self {
        Self { store, params }
    }

    fn load(&self, address: &Address) -> RegistryResult<StorageProvider> {
        read_record(self.store.as_ref(), &sp_key(address))?
            .ok_or(RegistryError::SpNotFound(*address))
    }
}

impl<S: StateStore, P: ParamStore> StorageProviderApi for RegistryService<S, P> {
    fn create_storage_provider(
        &self,
        msg: &MsgCreateStorageProvider,
    ) -> RegistryResult<StorageProvider> {
        let valid = msg.validate_basic()?;
        let min_deposit = self.params.params().sp.min_deposit;

        if valid.deposit < min_deposit {
            debug!(sp = %valid.sp_address, deposit = valid.deposit, min_deposit, "deposit below bond");
            return Err(RegistryError::InvalidAmount(format!(
                "deposit {} below minimum bond {}",
                valid.deposit, min_deposit
            )));
        }

        let key = sp_key(&valid.sp_address);
        if self.store.get(&key)?.is_some() {
            return Err(RegistryError::InvalidRequest(format!(
                "storage provider {} already exists",
                valid.sp_address
            )));
        }

        let sp = StorageProvider {
            operator_address: valid.sp_address,
            funding_address: valid.funding_address,
            deposit: valid.deposit,
            status: SpStatus::Active,
            description: valid.description,
        };

        let mut batch = WriteBatch::new();
        batch.put_record(key, &sp)?;
        batch.emit(LedgerEvent::StorageProviderBonded {
            sp_address: sp.operator_address,
            funding_address: sp.funding_address,
            deposit: sp.deposit,
        });
        self.store.commit(batch)?;

        info!(
            sp = %sp.operator_address,
            creator = %valid.creator,
            deposit = sp.deposit,
            "storage provider bonded"
        );
        Ok(sp)
    }

    fn edit_storage_provider(
        &self,
        msg: &MsgEditStorageProvider,
    ) -> RegistryResult<StorageProvider> {
        let (address, description) = msg.validate_basic()?;
        let mut sp = self.load(&address)?;

        if sp.description == description {
            return Ok(sp);
        }
        sp.description = description;

        let mut batch = WriteBatch::new();
        batch.put_record(sp_key(&address), &sp)?;
        batch.emit(LedgerEvent::StorageProviderEdited {
            sp_address: address,
        });
        self.store.commit(batch)?;

        info!(sp = %address, "storage provider edited");
        Ok(sp)
    }

    fn deposit(&self, msg: &MsgDeposit) -> RegistryResult<StorageProvider> {
        let (creator, address, amount) = msg.validate_basic()?;
        let mut sp = self.load(&address)?;

        sp.deposit = sp.deposit.checked_add(amount).ok_or_else(|| {
            RegistryError::InvalidAmount(format!("deposit overflow for {address}"))
        })?;

        let mut batch = WriteBatch::new();
        batch.put_record(sp_key(&address), &sp)?;
        batch.emit(LedgerEvent::StorageProviderDeposited {
            sp_address: address,
            amount,
            new_deposit: sp.deposit,
        });
        self.store.commit(batch)?;

        info!(sp = %address, %creator, amount, deposit = sp.deposit, "deposit added");
        Ok(sp)
    }

    fn plan_slash(
        &self,
        batch: &mut WriteBatch,
        sp_address: &Address,
        amount: Amount,
    ) -> RegistryResult<SlashOutcome> {
        let key = sp_key(sp_address);
        let mut sp: StorageProvider = batch
            .read_record(self.store.as_ref(), &key)?
            .ok_or(RegistryError::SpNotFound(*sp_address))?;

        let slashed = amount.min(sp.deposit);
        sp.deposit -= slashed;

        let min_deposit = self.params.params().sp.min_deposit;
        let jailed = sp.status == SpStatus::Active && sp.deposit < min_deposit;
        if jailed {
            sp.status = SpStatus::Jailed;
        }

        batch.put_record(key, &sp)?;
        batch.emit(LedgerEvent::StorageProviderSlashed {
            sp_address: *sp_address,
            amount: slashed,
            remaining_deposit: sp.deposit,
        });
        warn!(sp = %sp_address, slashed, remaining = sp.deposit, "storage provider slashed");

        if jailed {
            batch.emit(LedgerEvent::StorageProviderJailed {
                sp_address: *sp_address,
                deposit: sp.deposit,
            });
            warn!(sp = %sp_address, deposit = sp.deposit, min_deposit, "storage provider jailed");
        }

        Ok(SlashOutcome {
            sp_address: *sp_address,
            slashed,
            remaining_deposit: sp.deposit,
            jailed,
        })
    }

    fn slash(&self, sp_address: &Address, amount: Amount) -> RegistryResult<SlashOutcome> {
        let mut batch = WriteBatch::new();
        let outcome = self.plan_slash(&mut batch, sp_address, amount)?;
        self.store.commit(batch)?;
        Ok(outcome)
    }

    fn get_storage_provider(&self, address: &Address) -> RegistryResult<Option<StorageProvider>> {
        Ok(read_record(self.store.as_ref(), &sp_key(address))?)
    }

    fn staged_storage_provider(
        &self,
        batch: &WriteBatch,
        address: &Address,
    ) -> RegistryResult<Option<StorageProvider>> {
        Ok(batch.read_record(self.store.as_ref(), &sp_key(address))?)
    }

    fn list_storage_providers(&self) -> RegistryResult<Vec<StorageProvider>> {
        self.store
            .scan_prefix(SP_KEY_PREFIX)?
            .into_iter()
            .map(|(key, value)| decode_record(&key, &value).map_err(RegistryError::from))
            .collect()
    }
}
