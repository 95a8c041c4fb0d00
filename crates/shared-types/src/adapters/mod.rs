//! # In-Memory Adapters
//!
//! Reference implementations of the shared ports, used by tests and by hosts
//! that embed the ledger without a persistent backend.

pub mod height;
pub mod memory_store;
pub mod params;

pub use height::ManualHeight;
pub use memory_store::InMemoryStateStore;
pub use params::StaticParamStore;
