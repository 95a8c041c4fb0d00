//! # Storage Provider Registry (SL-02)
//!
//! Tracks storage provider identity, bonded deposit and status.
//!
//! ## Status Machine
//!
//! ```text
//! create ──→ [ACTIVE] ──slash below min_deposit──→ [JAILED]
//!               │                                     │
//!               └─── deposit / edit / slash ──────────┘ (status unchanged)
//! ```
//!
//! Records are never deleted. Deposits never re-activate a jailed provider;
//! JAILED only removes the provider from new object assignments.
//!
//! ## Callers
//!
//! | Operation | Caller |
//! |-----------|--------|
//! | create / edit / deposit | message dispatch |
//! | slash / plan_slash | challenge engine only |
//! | queries | object ledger, challenge engine, hosts |

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::entities::{Description, SpStatus, StorageProvider};
pub use domain::errors::{RegistryError, RegistryResult};
pub use domain::messages::{MsgCreateStorageProvider, MsgDeposit, MsgEditStorageProvider};
pub use ports::inbound::{SlashOutcome, StorageProviderApi};
pub use service::RegistryService;
