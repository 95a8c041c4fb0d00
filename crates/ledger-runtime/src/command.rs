//! # Commands
//!
//! Closed set of requests the ledger executes, with per-message route, type
//! and signer metadata answered by one `match`.

use crate::error::LedgerError;
use crate::registry::{self, MessageType};
use serde::{Deserialize, Serialize};
use shared_types::ChallengeParams;
use sl_02_sp_registry::{
    MsgCreateStorageProvider, MsgDeposit, MsgEditStorageProvider, StorageProvider,
};
use sl_03_object_ledger::{MsgCreateObject, MsgSealObject, Object};
use sl_04_challenge::{Challenge, MsgAttest, MsgSubmitChallenge, MsgUpdateParams};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", content = "msg")]
pub enum Command {
    CreateStorageProvider(MsgCreateStorageProvider),
    EditStorageProvider(MsgEditStorageProvider),
    Deposit(MsgDeposit),
    CreateObject(MsgCreateObject),
    SealObject(MsgSealObject),
    SubmitChallenge(MsgSubmitChallenge),
    Attest(MsgAttest),
    UpdateParams(MsgUpdateParams),
}

/// Successful outcome of a [`Command`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandResult {
    StorageProvider(StorageProvider),
    Object(Object),
    Challenge(Challenge),
    ChallengeParams(ChallengeParams),
}

impl Command {
    pub fn type_url(&self) -> &'static str {
        match self {
            Self::CreateStorageProvider(_) => registry::CREATE_STORAGE_PROVIDER,
            Self::EditStorageProvider(_) => registry::EDIT_STORAGE_PROVIDER,
            Self::Deposit(_) => registry::DEPOSIT,
            Self::CreateObject(_) => registry::CREATE_OBJECT,
            Self::SealObject(_) => registry::SEAL_OBJECT,
            Self::SubmitChallenge(_) => registry::SUBMIT_CHALLENGE,
            Self::Attest(_) => registry::ATTEST,
            Self::UpdateParams(_) => registry::UPDATE_PARAMS,
        }
    }

    pub fn message_type(&self) -> Option<&'static MessageType> {
        registry::lookup(self.type_url())
    }

    /// Module the command is routed to.
    pub fn route(&self) -> &'static str {
        self.message_type().map_or("", |t| t.route)
    }

    /// Accounts that must authorize the command, in textual form.
    ///
    /// Sealing is authorized by the primary SP's approval inside the message,
    /// so it names no transaction signer.
    pub fn signers(&self) -> Vec<&str> {
        match self {
            Self::CreateStorageProvider(m) => vec![m.creator.as_str()],
            Self::EditStorageProvider(m) => vec![m.sp_address.as_str()],
            Self::Deposit(m) => vec![m.creator.as_str()],
            Self::CreateObject(m) => vec![m.owner.as_str()],
            Self::SealObject(_) => vec![],
            Self::SubmitChallenge(m) => vec![m.challenger.as_str()],
            Self::Attest(m) => vec![m.attester.as_str()],
            Self::UpdateParams(m) => vec![m.authority.as_str()],
        }
    }

    /// Decode a JSON message body registered under `type_url`.
    pub fn decode(type_url: &str, body: &str) -> Result<Self, LedgerError> {
        let message_type =
            registry::lookup(type_url).ok_or_else(|| LedgerError::UnknownMessage(type_url.into()))?;

        let decode_err = |e: serde_json::Error| LedgerError::Decode {
            type_url: message_type.type_url.into(),
            reason: e.to_string(),
        };

        let command = match message_type.type_url {
            registry::CREATE_STORAGE_PROVIDER => {
                Self::CreateStorageProvider(serde_json::from_str(body).map_err(decode_err)?)
            }
            registry::EDIT_STORAGE_PROVIDER => {
                Self::EditStorageProvider(serde_json::from_str(body).map_err(decode_err)?)
            }
            registry::DEPOSIT => Self::Deposit(serde_json::from_str(body).map_err(decode_err)?),
            registry::CREATE_OBJECT => {
                Self::CreateObject(serde_json::from_str(body).map_err(decode_err)?)
            }
            registry::SEAL_OBJECT => {
                Self::SealObject(serde_json::from_str(body).map_err(decode_err)?)
            }
            registry::SUBMIT_CHALLENGE => {
                Self::SubmitChallenge(serde_json::from_str(body).map_err(decode_err)?)
            }
            registry::ATTEST => Self::Attest(serde_json::from_str(body).map_err(decode_err)?),
            registry::UPDATE_PARAMS => {
                Self::UpdateParams(serde_json::from_str(body).map_err(decode_err)?)
            }
            other => return Err(LedgerError::UnknownMessage(other.into())),
        };
        Ok(command)
    }
}
