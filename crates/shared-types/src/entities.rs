//! # Core Domain Entities
//!
//! Primitive identifiers shared by the registry, the object ledger and the
//! challenge engine.

use crate::errors::AddressError;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// A 32-byte digest (object checksums, sign-doc hashes).
pub type Hash = [u8; 32];

/// Block height reported by the host ledger.
pub type Height = u64;

/// Sequential object identifier, assigned by the object ledger.
pub type ObjectId = u64;

/// Sequential challenge identifier, assigned by the challenge engine.
pub type ChallengeId = u64;

/// Token amount in base units.
pub type Amount = u128;

/// A 20-byte account address.
///
/// The textual form is 40 hex digits, optionally `0x`-prefixed. Anything
/// else is rejected with [`AddressError`], which subsystems surface as
/// `InvalidAddress`.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, SerializeDisplay, DeserializeFromStr,
)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Address length in bytes.
    pub const LEN: usize = 20;

    /// Wrap raw address bytes.
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parse the textual form of an address.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.len() != Self::LEN * 2 {
            return Err(AddressError::InvalidLength {
                input: s.to_string(),
                len: digits.len(),
            });
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| AddressError::InvalidHex {
            input: s.to_string(),
        })?;
        Ok(Self(bytes))
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// `0x`-prefixed lower-case hex form.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}
