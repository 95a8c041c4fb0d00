//! # Approval Records
//!
//! The authorization objects attached to seal requests.

use super::sign_doc::SignDoc;
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use shared_types::{Address, Hash, Height};

/// Height-bounded authorization: a signature valid up to `expired_height`.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    /// Last height at which the approval is accepted.
    pub expired_height: Height,
    /// 65-byte recoverable signature.
    #[serde_as(as = "Hex")]
    pub sig: Vec<u8>,
}

impl Approval {
    pub fn new(expired_height: Height, sig: Vec<u8>) -> Self {
        Self {
            expired_height,
            sig,
        }
    }

    /// Whether the deadline still holds at `current_height`.
    pub fn is_live_at(&self, current_height: Height) -> bool {
        current_height <= self.expired_height
    }
}

/// Statement by a secondary SP that it holds the piece with `checksum`.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondarySpSignDoc {
    pub sp_address: Address,
    #[serde_as(as = "Hex")]
    pub checksum: Hash,
}

impl SecondarySpSignDoc {
    pub fn new(sp_address: Address, checksum: Hash) -> Self {
        Self {
            sp_address,
            checksum,
        }
    }
}

impl SignDoc for SecondarySpSignDoc {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_is_inclusive() {
        let approval = Approval::new(15, vec![]);
        assert!(approval.is_live_at(15));
        assert!(!approval.is_live_at(16));
    }

    #[test]
    fn test_secondary_doc_canonical_form() {
        let doc = SecondarySpSignDoc::new(Address::new([0x11; 20]), [0xAB; 32]);
        let json = String::from_utf8(doc.sign_bytes().unwrap()).unwrap();
        assert_eq!(
            json,
            format!(
                r#"{{"checksum":"{}","sp_address":"0x{}"}}"#,
                "ab".repeat(32),
                "11".repeat(20)
            )
        );
    }
}
