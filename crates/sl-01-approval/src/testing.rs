//! Key generation and signing helpers for tests.
//!
//! Enabled in downstream crates with the `test-utils` feature.

use crate::domain::ecdsa::{address_from_pubkey, keccak256, RecoverableSignature};
use crate::domain::sign_doc::SignDoc;
use k256::ecdsa::{RecoveryId, SigningKey};
use shared_types::Address;

/// Fresh random key and its address.
pub fn generate_keypair() -> (SigningKey, Address) {
    let key = SigningKey::random(&mut rand::thread_rng());
    let address = address_from_pubkey(key.verifying_key());
    (key, address)
}

/// Sign `keccak256(message)` and encode as `r ‖ s ‖ v` with low S.
pub fn sign_message(key: &SigningKey, message: &[u8]) -> Vec<u8> {
    let hash = keccak256(message);
    let (sig, recid) = key
        .sign_prehash_recoverable(&hash)
        .expect("signing a 32-byte prehash cannot fail");

    let (sig, recid) = match sig.normalize_s() {
        Some(low) => (
            low,
            RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced()),
        ),
        None => (sig, recid),
    };

    let bytes = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    s.copy_from_slice(&bytes[32..]);
    RecoverableSignature {
        r,
        s,
        v: recid.to_byte() + 27,
    }
    .to_bytes()
    .to_vec()
}

/// Sign the canonical bytes of a sign doc.
pub fn sign_doc<D: SignDoc>(key: &SigningKey, doc: &D) -> Vec<u8> {
    let bytes = doc.sign_bytes().expect("sign doc encodes");
    sign_message(key, &bytes)
}
