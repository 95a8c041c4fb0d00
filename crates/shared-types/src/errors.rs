//! # Error Types
//!
//! Errors raised by the shared primitives and the collaborator ports.

use thiserror::Error;

/// Malformed textual address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Nothing to parse.
    #[error("empty address")]
    Empty,

    /// Wrong number of hex digits.
    #[error("invalid address length for {input:?}: {len} hex digits, expected 40")]
    InvalidLength { input: String, len: usize },

    /// Non-hex characters.
    #[error("invalid hex in address {input:?}")]
    InvalidHex { input: String },
}

/// Failures reported by the ledger state store.
///
/// These are not the core's responsibility; subsystems propagate them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Record could not be encoded for storage.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored bytes could not be decoded.
    #[error("Corrupted record at key {key}: {reason}")]
    Corrupted { key: String, reason: String },

    /// The backing store failed.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Invalid module parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    /// A parameter is outside its allowed range.
    #[error("invalid parameter {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
