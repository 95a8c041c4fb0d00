//! # Domain Layer
//!
//! Pure cryptographic logic with no I/O dependencies.

pub mod approval;
pub mod ecdsa;
pub mod errors;
pub mod sign_doc;
