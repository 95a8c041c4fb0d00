//! # Storage-Ledger Test Suite
//!
//! Cross-subsystem flows driven through [`ledger_runtime::LedgerRuntime`].
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Runtime harness, keys, message builders
//! └── integration/      # End-to-end flows
//!     ├── lifecycle.rs      # bond → object → seal → challenge → attest
//!     ├── expiry.rs         # unanswered challenges and the height sweep
//!     ├── erasure_coded.rs  # EC sealing thresholds
//!     └── codec.rs          # type-URL decoding into dispatch
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sl-tests
//! cargo test -p sl-tests integration::expiry
//! ```

pub mod fixtures;
pub mod integration;
