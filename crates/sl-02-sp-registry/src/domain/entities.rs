//! # Storage Provider Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount};

const MAX_MONIKER_LENGTH: usize = 70;
const MAX_IDENTITY_LENGTH: usize = 3000;
const MAX_WEBSITE_LENGTH: usize = 140;
const MAX_SECURITY_CONTACT_LENGTH: usize = 140;
const MAX_DETAILS_LENGTH: usize = 280;

/// Key prefix of storage provider records.
pub const SP_KEY_PREFIX: &[u8] = b"sp/";

/// Storage key of a provider record.
pub fn sp_key(address: &Address) -> Vec<u8> {
    let mut key = Vec::with_capacity(SP_KEY_PREFIX.len() + Address::LEN);
    key.extend_from_slice(SP_KEY_PREFIX);
    key.extend_from_slice(address.as_bytes());
    key
}

/// Provider lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpStatus {
    Unbonded,
    Active,
    Jailed,
}

/// Human-readable provider metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub security_contact: String,
    pub details: String,
}

impl Description {
    pub fn new(moniker: impl Into<String>) -> Self {
        Self {
            moniker: moniker.into(),
            ..Default::default()
        }
    }

    /// Every field empty.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Name of the first field over its length limit, if any.
    pub fn oversized_field(&self) -> Option<&'static str> {
        [
            ("moniker", self.moniker.len(), MAX_MONIKER_LENGTH),
            ("identity", self.identity.len(), MAX_IDENTITY_LENGTH),
            ("website", self.website.len(), MAX_WEBSITE_LENGTH),
            (
                "security_contact",
                self.security_contact.len(),
                MAX_SECURITY_CONTACT_LENGTH,
            ),
            ("details", self.details.len(), MAX_DETAILS_LENGTH),
        ]
        .into_iter()
        .find(|(_, len, max)| len > max)
        .map(|(name, _, _)| name)
    }
}

/// A bonded storage provider.
///
/// Invariant: `deposit >= min_deposit` while `status == Active`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageProvider {
    /// Operator (identity) address.
    pub operator_address: Address,
    /// Address that funds deposits. May equal the operator address.
    pub funding_address: Address,
    /// Bonded deposit.
    pub deposit: Amount,
    pub status: SpStatus,
    pub description: Description,
}

impl StorageProvider {
    pub fn is_active(&self) -> bool {
        self.status == SpStatus::Active
    }
}
