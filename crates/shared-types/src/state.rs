//! # Ledger State Port
//!
//! Key/value access to the host ledger's state. Each subsystem owns a key
//! prefix; records are `bincode`-encoded.
//!
//! Writes never go straight to the store: an operation stages puts,
//! deletes and events in a [`WriteBatch`], reads its own staged writes back
//! through [`WriteBatch::read_record`], and commits once. A batch that is
//! dropped instead of committed leaves the store untouched.

use crate::errors::StoreError;
use crate::events::LedgerEvent;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key/value store provided by the ledger execution environment.
pub trait StateStore: Send + Sync {
    /// Read a single key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// All entries whose key starts with `prefix`, in ascending key order.
    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError>;

    /// Apply every write of the batch atomically and publish its events.
    fn commit(&self, batch: WriteBatch) -> Result<(), StoreError>;
}

/// A staged mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    Put { key: Vec<u8>, value: Vec<u8> },
    Delete { key: Vec<u8> },
}

impl WriteOp {
    pub fn key(&self) -> &[u8] {
        match self {
            Self::Put { key, .. } | Self::Delete { key } => key,
        }
    }
}

/// Writes and events of a single operation.
#[derive(Debug, Default, Clone)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
    events: Vec<LedgerEvent>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an encoded record under `key`.
    pub fn put_record<T: Serialize>(&mut self, key: Vec<u8>, record: &T) -> Result<(), StoreError> {
        let value = encode_record(record)?;
        self.ops.push(WriteOp::Put { key, value });
        Ok(())
    }

    /// Stage raw bytes under `key`.
    pub fn put_raw(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.ops.push(WriteOp::Put { key, value });
    }

    /// Stage a deletion.
    pub fn delete(&mut self, key: Vec<u8>) {
        self.ops.push(WriteOp::Delete { key });
    }

    /// Queue an event; it is published only if the batch commits.
    pub fn emit(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }

    /// Most recent staged write for `key`, if any.
    ///
    /// `Some(None)` means the key is staged for deletion.
    pub fn staged(&self, key: &[u8]) -> Option<Option<&[u8]>> {
        self.ops.iter().rev().find(|op| op.key() == key).map(|op| match op {
            WriteOp::Put { value, .. } => Some(value.as_slice()),
            WriteOp::Delete { .. } => None,
        })
    }

    /// Read a record as it would look after this batch commits.
    pub fn read_record<T: DeserializeOwned>(
        &self,
        store: &dyn StateStore,
        key: &[u8],
    ) -> Result<Option<T>, StoreError> {
        match self.staged(key) {
            Some(Some(bytes)) => decode_record(key, bytes).map(Some),
            Some(None) => Ok(None),
            None => read_record(store, key),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty() && self.events.is_empty()
    }

    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn into_parts(self) -> (Vec<WriteOp>, Vec<LedgerEvent>) {
        (self.ops, self.events)
    }
}

/// Read and decode a committed record.
pub fn read_record<T: DeserializeOwned>(
    store: &dyn StateStore,
    key: &[u8],
) -> Result<Option<T>, StoreError> {
    match store.get(key)? {
        Some(bytes) => decode_record(key, &bytes).map(Some),
        None => Ok(None),
    }
}

pub fn encode_record<T: Serialize>(record: &T) -> Result<Vec<u8>, StoreError> {
    bincode::serialize(record).map_err(|e| StoreError::Serialization(e.to_string()))
}

pub fn decode_record<T: DeserializeOwned>(key: &[u8], bytes: &[u8]) -> Result<T, StoreError> {
    bincode::deserialize(bytes).map_err(|e| StoreError::Corrupted {
        key: String::from_utf8_lossy(key).into_owned(),
        reason: e.to_string(),
    })
}
