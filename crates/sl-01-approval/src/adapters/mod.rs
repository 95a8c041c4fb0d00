//! # Adapters
//!
//! Concrete implementations of the outbound ports.

pub mod secp256k1;

pub use secp256k1::Secp256k1Verifier;
