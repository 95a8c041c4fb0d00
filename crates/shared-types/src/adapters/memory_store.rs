use crate::errors::StoreError;
use crate::events::LedgerEvent;
use crate::state::{StateStore, WriteBatch, WriteOp};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// In-memory implementation of [`StateStore`].
///
/// Keys are kept in a `BTreeMap` so prefix scans come back in a
/// deterministic order. Committed events are retained for inspection.
#[derive(Default)]
pub struct InMemoryStateStore {
    entries: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
    events: RwLock<Vec<LedgerEvent>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Every event committed so far, in commit order.
    pub fn events(&self) -> Vec<LedgerEvent> {
        self.events.read().clone()
    }

    /// Take and clear the committed events.
    pub fn drain_events(&self) -> Vec<LedgerEvent> {
        std::mem::take(&mut *self.events.write())
    }

    /// Copy of the full key space, for state comparisons in tests.
    pub fn snapshot(&self) -> BTreeMap<Vec<u8>, Vec<u8>> {
        self.entries.read().clone()
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError> {
        let entries = self.entries.read();
        Ok(entries
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        let (ops, events) = batch.into_parts();
        {
            // Both locks are held together so readers never observe a
            // half-applied batch.
            let mut entries = self.entries.write();
            let mut log = self.events.write();
            for op in ops {
                match op {
                    WriteOp::Put { key, value } => {
                        entries.insert(key, value);
                    }
                    WriteOp::Delete { key } => {
                        entries.remove(&key);
                    }
                }
            }
            for event in &events {
                tracing::trace!(target: "ledger.events", event = event.name(), "event committed");
            }
            log.extend(events);
        }
        Ok(())
    }
}
