//! # ECDSA Recovery (secp256k1)
//!
//! Recovers the signing address from a 65-byte `r ‖ s ‖ v` signature.
//!
//! ## Security Notes
//!
//! - **Malleability**: S must be in the lower half of the curve order.
//! - **Scalar range**: R and S must be in [1, n-1]; k256 rejects the rest.
//! - **Signer comparison**: addresses are compared with `subtle`.

use super::errors::ApprovalError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash};
use subtle::ConstantTimeEq;

/// Length of an encoded recoverable signature.
pub const SIGNATURE_LEN: usize = 65;

/// A recoverable secp256k1 signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery id (0, 1, 27 or 28)
    pub v: u8,
}

impl RecoverableSignature {
    /// Split `r ‖ s ‖ v` into its components.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ApprovalError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(ApprovalError::InvalidFormat(format!(
                "expected {SIGNATURE_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v: bytes[64] })
    }

    /// Encode as `r ‖ s ‖ v`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&hasher.finalize());
    hash
}

/// Address of a public key: last 20 bytes of keccak256 over the
/// uncompressed point without its `0x04` tag.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let encoded = public_key.to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Address::new(address)
}

/// Recover the signer address of `message_hash`.
pub fn recover_signer(
    message_hash: &Hash,
    signature: &RecoverableSignature,
) -> Result<Address, ApprovalError> {
    let recovery_id = parse_recovery_id(signature.v)?;

    let mut rs = [0u8; 64];
    rs[..32].copy_from_slice(&signature.r);
    rs[32..].copy_from_slice(&signature.s);
    let sig = Signature::from_slice(&rs)
        .map_err(|e| ApprovalError::InvalidFormat(e.to_string()))?;

    // normalize_s returns a value only when S was in the upper half.
    if sig.normalize_s().is_some() {
        return Err(ApprovalError::MalleableSignature);
    }

    let key = VerifyingKey::recover_from_prehash(message_hash, &sig, recovery_id)
        .map_err(|_| ApprovalError::RecoveryFailed)?;
    Ok(address_from_pubkey(&key))
}

/// Check that `signature` over `keccak256(message)` was produced by `expected`.
pub fn verify_signer(
    expected: &Address,
    message: &[u8],
    signature: &[u8],
) -> Result<(), ApprovalError> {
    let signature = RecoverableSignature::from_bytes(signature)?;
    let actual = recover_signer(&keccak256(message), &signature)?;

    if bool::from(actual.as_bytes().ct_eq(expected.as_bytes())) {
        Ok(())
    } else {
        Err(ApprovalError::SignerMismatch {
            expected: *expected,
            actual,
        })
    }
}

/// Parse recovery ID from v value.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, ApprovalError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(ApprovalError::InvalidRecoveryId(v)),
    };
    RecoveryId::try_from(id).map_err(|_| ApprovalError::InvalidRecoveryId(v))
}
