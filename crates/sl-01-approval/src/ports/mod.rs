//! # Ports Layer
//!
//! - **Inbound (Driving)**: `ApprovalApi`, used by the object ledger and the
//!   challenge engine
//! - **Outbound (Driven)**: `SignatureVerifier`, the key-management primitive

pub mod inbound;
pub mod outbound;
