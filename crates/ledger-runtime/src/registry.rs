//! # Message Type Registry
//!
//! Static table of every message the ledger accepts, keyed by type URL.
//! Built once on first use.
//!
//! | Type URL | Route | Type |
//! |----------|-------|------|
//! | `/storage.sp.MsgCreateStorageProvider` | `sp` | `create_storage_provider` |
//! | `/storage.sp.MsgEditStorageProvider` | `sp` | `edit_storage_provider` |
//! | `/storage.sp.MsgDeposit` | `sp` | `deposit` |
//! | `/storage.storage.MsgCreateObject` | `storage` | `create_object` |
//! | `/storage.storage.MsgSealObject` | `storage` | `seal_object` |
//! | `/storage.challenge.MsgSubmit` | `challenge` | `submit` |
//! | `/storage.challenge.MsgAttest` | `challenge` | `attest` |
//! | `/storage.challenge.MsgUpdateParams` | `challenge` | `update_params` |

use lazy_static::lazy_static;
use std::collections::BTreeMap;

/// Registration record of one message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageType {
    pub type_url: &'static str,
    /// Module the message is routed to.
    pub route: &'static str,
    pub type_name: &'static str,
    /// Name used by the legacy JSON codec.
    pub legacy_name: &'static str,
}

pub const CREATE_STORAGE_PROVIDER: &str = "/storage.sp.MsgCreateStorageProvider";
pub const EDIT_STORAGE_PROVIDER: &str = "/storage.sp.MsgEditStorageProvider";
pub const DEPOSIT: &str = "/storage.sp.MsgDeposit";
pub const CREATE_OBJECT: &str = "/storage.storage.MsgCreateObject";
pub const SEAL_OBJECT: &str = "/storage.storage.MsgSealObject";
pub const SUBMIT_CHALLENGE: &str = "/storage.challenge.MsgSubmit";
pub const ATTEST: &str = "/storage.challenge.MsgAttest";
pub const UPDATE_PARAMS: &str = "/storage.challenge.MsgUpdateParams";

const fn entry(
    type_url: &'static str,
    route: &'static str,
    type_name: &'static str,
    legacy_name: &'static str,
) -> MessageType {
    MessageType {
        type_url,
        route,
        type_name,
        legacy_name,
    }
}

lazy_static! {
    static ref MESSAGE_TYPES: BTreeMap<&'static str, MessageType> = [
        entry(CREATE_STORAGE_PROVIDER, "sp", "create_storage_provider", "sp/CreateStorageProvider"),
        entry(EDIT_STORAGE_PROVIDER, "sp", "edit_storage_provider", "sp/EditStorageProvider"),
        entry(DEPOSIT, "sp", "deposit", "sp/Deposit"),
        entry(CREATE_OBJECT, "storage", "create_object", "storage/CreateObject"),
        entry(SEAL_OBJECT, "storage", "seal_object", "storage/SealObject"),
        entry(SUBMIT_CHALLENGE, "challenge", "submit", "challenge/Submit"),
        entry(ATTEST, "challenge", "attest", "challenge/Attest"),
        entry(UPDATE_PARAMS, "challenge", "update_params", "challenge/UpdateParams"),
    ]
    .into_iter()
    .map(|t| (t.type_url, t))
    .collect();
}

/// Registration for `type_url`, if the ledger accepts it.
pub fn lookup(type_url: &str) -> Option<&'static MessageType> {
    MESSAGE_TYPES.get(type_url)
}

/// Every registered message type, in type URL order.
pub fn message_types() -> impl Iterator<Item = &'static MessageType> {
    MESSAGE_TYPES.values()
}
