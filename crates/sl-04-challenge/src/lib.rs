//! # Challenge-Attestation Engine (SL-04)
//!
//! Verifies that storage providers still hold what they were paid to store.
//!
//! ## State Machine
//!
//! ```text
//!                  ┌── attest(Valid) ───→ [ATTESTED_VALID]
//! submit ──→ [PENDING] ── attest(Invalid) ─→ [ATTESTED_INVALID] ─┐
//!                  └── expiry passes ────→ [EXPIRED] ────────────┴─→ slash SP
//! ```
//!
//! Terminal states are immutable. The first attestation wins; later ones fail
//! with `ChallengeAlreadyResolved`.
//!
//! ## Attesters
//!
//! Only accounts in `ChallengeParams::attesters` may attest, and never the
//! challenged provider or the challenger. Anyone else gets `Unauthorized`.
//!
//! ## Silence Is Failure
//!
//! A challenge nobody attests before its expiry height is settled exactly
//! like an invalid attestation. Providers are expected to answer.
//!
//! ## Atomicity
//!
//! The challenge transition and the registry slash are staged into one
//! [`WriteBatch`](shared_types::WriteBatch) and committed together.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::entities::{AttestationResult, AttestationSignDoc, Challenge, ChallengeStatus};
pub use domain::errors::{ChallengeError, ChallengeResult};
pub use domain::messages::{MsgAttest, MsgSubmitChallenge, MsgUpdateParams};
pub use ports::inbound::{ChallengeApi, ExpirySweep};
pub use service::ChallengeService;
