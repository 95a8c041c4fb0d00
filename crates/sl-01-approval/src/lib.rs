//! # Approval Verifier (SL-01)
//!
//! Validates the multi-party authorizations attached to object seal
//! requests and challenge attestations.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): secp256k1 recovery, canonical sign docs,
//!   the `Approval` record. Pure, no I/O.
//! - **Ports Layer** (`ports/`): the `ApprovalApi` used by other subsystems
//!   and the `SignatureVerifier` key-management primitive it depends on.
//! - **Adapters** (`adapters/`): the k256-backed `Secp256k1Verifier`.
//! - **Service Layer** (`service.rs`): `ApprovalVerifier`, the stateless
//!   predicate `verify(signer, message, signature, expired_height, current_height)`.
//!
//! ## Signature Format
//!
//! Signatures are 65 bytes, `r ‖ s ‖ v`, over `keccak256(message)`. High-s
//! signatures are rejected so a signature has exactly one valid encoding.
//! The signer is identified by its 20-byte address, recovered from the
//! signature and compared in constant time.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use adapters::Secp256k1Verifier;
pub use domain::approval::{Approval, SecondarySpSignDoc};
pub use domain::ecdsa::{address_from_pubkey, keccak256, recover_signer, RecoverableSignature};
pub use domain::errors::ApprovalError;
pub use domain::sign_doc::{canonical_json, SignDoc};
pub use ports::inbound::ApprovalApi;
pub use ports::outbound::SignatureVerifier;
pub use service::ApprovalVerifier;
