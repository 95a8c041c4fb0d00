//! # Inbound Ports
//!
//! API of the registry as seen by the dispatch layer and by the other
//! subsystems.

use crate::domain::entities::StorageProvider;
use crate::domain::errors::RegistryResult;
use crate::domain::messages::{MsgCreateStorageProvider, MsgDeposit, MsgEditStorageProvider};
use shared_types::{Address, Amount, WriteBatch};

/// Effect of a slash on a provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlashOutcome {
    pub sp_address: Address,
    /// Amount actually removed (capped at the deposit).
    pub slashed: Amount,
    pub remaining_deposit: Amount,
    /// The slash moved the provider from ACTIVE to JAILED.
    pub jailed: bool,
}

/// Storage provider registry API.
pub trait StorageProviderApi: Send + Sync {
    /// Bond a new provider in ACTIVE status.
    fn create_storage_provider(
        &self,
        msg: &MsgCreateStorageProvider,
    ) -> RegistryResult<StorageProvider>;

    /// Replace the description. Resubmitting identical values is a no-op.
    fn edit_storage_provider(&self, msg: &MsgEditStorageProvider)
        -> RegistryResult<StorageProvider>;

    /// Increase the bonded deposit without touching the status.
    fn deposit(&self, msg: &MsgDeposit) -> RegistryResult<StorageProvider>;

    /// Stage a slash into the caller's batch.
    ///
    /// Reserved for the challenge engine, which commits the slash together
    /// with the challenge resolution. Reads see earlier writes in `batch`, so
    /// several slashes against the same provider compound.
    fn plan_slash(
        &self,
        batch: &mut WriteBatch,
        sp_address: &Address,
        amount: Amount,
    ) -> RegistryResult<SlashOutcome>;

    /// Slash and commit immediately.
    fn slash(&self, sp_address: &Address, amount: Amount) -> RegistryResult<SlashOutcome>;

    fn get_storage_provider(&self, address: &Address) -> RegistryResult<Option<StorageProvider>>;

    /// Provider as it will look once `batch` commits.
    fn staged_storage_provider(
        &self,
        batch: &WriteBatch,
        address: &Address,
    ) -> RegistryResult<Option<StorageProvider>>;

    /// Registered and ACTIVE. Unknown providers are not active.
    fn is_active(&self, address: &Address) -> RegistryResult<bool> {
        Ok(self
            .get_storage_provider(address)?
            .is_some_and(|sp| sp.is_active()))
    }

    /// All providers in ascending address order.
    fn list_storage_providers(&self) -> RegistryResult<Vec<StorageProvider>>;
}
