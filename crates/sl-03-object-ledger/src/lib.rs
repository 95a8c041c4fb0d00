//! # Object Ledger (SL-03)
//!
//! Authoritative status and redundancy metadata for every stored object.
//!
//! ## Lifecycle
//!
//! ```text
//! create_object ──→ [CREATED] ──seal_object (approved)──→ [SEALED]
//! ```
//!
//! The transition is one-way. Sealing needs:
//! - an unexpired [`Approval`](sl_01_approval::Approval) signed by the
//!   primary SP over the object's seal doc;
//! - checksum-consistent co-signatures from secondary SPs, at least
//!   `ec_min_secondary_signatures` of them for erasure-coded objects.
//!
//! Storage providers are referenced by address only; the registry is
//! consulted at creation time to check they are ACTIVE.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::entities::{
    Object, ObjectSealSignDoc, ObjectStatus, ReadQuota, RedundancyType, SecondarySignature,
    SourceType,
};
pub use domain::errors::{ObjectError, ObjectResult};
pub use domain::messages::{MsgCreateObject, MsgSealObject};
pub use ports::inbound::ObjectLedgerApi;
pub use service::ObjectService;
