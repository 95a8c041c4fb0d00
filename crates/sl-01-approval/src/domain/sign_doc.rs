//! # Canonical Sign Docs
//!
//! Every signed payload is a serde struct encoded as JSON with object keys
//! sorted lexicographically and no whitespace. Byte fields are serialised as
//! lower-case hex by the doc types themselves.

use super::errors::ApprovalError;
use serde::Serialize;

/// A payload that is signed by its canonical byte encoding.
pub trait SignDoc: Serialize {
    /// Canonical bytes the signer commits to.
    fn sign_bytes(&self) -> Result<Vec<u8>, ApprovalError> {
        canonical_json(self)
    }
}

/// Encode `doc` as sorted-key compact JSON.
pub fn canonical_json<T: Serialize + ?Sized>(doc: &T) -> Result<Vec<u8>, ApprovalError> {
    // Round-tripping through Value sorts map keys (BTreeMap-backed objects).
    let value = serde_json::to_value(doc).map_err(|e| ApprovalError::Encoding(e.to_string()))?;
    serde_json::to_vec(&value).map_err(|e| ApprovalError::Encoding(e.to_string()))
}
