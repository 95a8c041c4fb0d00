//! # Registry Messages
//!
//! Request contracts as delivered by the dispatch layer. Addresses arrive in
//! textual form; `validate_basic` performs every stateless check and yields
//! the parsed request.

use super::entities::Description;
use super::errors::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount};

fn parse_address(field: &'static str, value: &str) -> RegistryResult<Address> {
    Address::from_hex(value).map_err(|source| RegistryError::InvalidAddress { field, source })
}

fn check_description(description: &Description) -> RegistryResult<()> {
    if description.is_empty() {
        return Err(RegistryError::InvalidRequest("empty description".into()));
    }
    if let Some(field) = description.oversized_field() {
        return Err(RegistryError::InvalidRequest(format!(
            "description {field} too long"
        )));
    }
    Ok(())
}

/// Bond a new storage provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateStorageProvider {
    pub creator: String,
    pub sp_address: String,
    pub funding_address: String,
    pub description: Description,
    pub deposit: Amount,
}

/// [`MsgCreateStorageProvider`] after stateless validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidCreateStorageProvider {
    pub creator: Address,
    pub sp_address: Address,
    pub funding_address: Address,
    pub description: Description,
    pub deposit: Amount,
}

impl MsgCreateStorageProvider {
    pub fn validate_basic(&self) -> RegistryResult<ValidCreateStorageProvider> {
        let creator = parse_address("creator", &self.creator)?;
        let sp_address = parse_address("sp", &self.sp_address)?;
        let funding_address = parse_address("funding", &self.funding_address)?;

        if self.deposit == 0 {
            return Err(RegistryError::InvalidRequest("invalid deposit amount".into()));
        }
        check_description(&self.description)?;

        Ok(ValidCreateStorageProvider {
            creator,
            sp_address,
            funding_address,
            description: self.description.clone(),
            deposit: self.deposit,
        })
    }
}

/// Replace a provider's description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgEditStorageProvider {
    pub sp_address: String,
    pub description: Description,
}

impl MsgEditStorageProvider {
    pub fn validate_basic(&self) -> RegistryResult<(Address, Description)> {
        let sp_address = parse_address("sp", &self.sp_address)?;
        check_description(&self.description)?;
        Ok((sp_address, self.description.clone()))
    }
}

/// Top up a provider's deposit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgDeposit {
    pub creator: String,
    pub sp_address: String,
    pub deposit: Amount,
}

impl MsgDeposit {
    pub fn validate_basic(&self) -> RegistryResult<(Address, Address, Amount)> {
        let creator = parse_address("creator", &self.creator)?;
        let sp_address = parse_address("sp", &self.sp_address)?;
        if self.deposit == 0 {
            return Err(RegistryError::InvalidAmount(
                "deposit must be positive".into(),
            ));
        }
        Ok((creator, sp_address, self.deposit))
    }
}
