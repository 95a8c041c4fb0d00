//! # Shared Types Crate
//!
//! Primitives and ports shared by every subsystem of the storage ledger.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: addresses, ids and the ledger event stream
//!   are defined once here.
//! - **Ports, not engines**: the state store, block-height source and
//!   parameter store are traits; the host ledger provides the real
//!   implementations, `adapters` provides in-memory ones.
//! - **All-or-nothing writes**: subsystems stage every mutation of an
//!   operation in a [`WriteBatch`] and commit it once validation is complete.

pub mod adapters;
pub mod entities;
pub mod errors;
pub mod events;
pub mod height;
pub mod params;
pub mod state;

pub use adapters::{InMemoryStateStore, ManualHeight, StaticParamStore};
pub use entities::*;
pub use errors::*;
pub use events::LedgerEvent;
pub use height::BlockHeightSource;
pub use params::{ChallengeParams, ParamStore, Params, SpParams, StorageParams, BPS_DENOMINATOR};
pub use state::{read_record, StateStore, WriteBatch, WriteOp};
