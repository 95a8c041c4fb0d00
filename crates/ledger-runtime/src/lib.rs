//! # Ledger Runtime
//!
//! Assembles the storage-ledger subsystems behind one dispatch entry point.
//!
//! ## Wiring
//!
//! ```text
//!            Command ──→ LedgerRuntime::dispatch ──→ CommandResult
//!                                │
//!     ┌──────────────┬───────────┼──────────────┐
//!     ▼              ▼           ▼              ▼
//!  SL-02 registry  SL-03 objects  SL-04 challenges   (SL-01 verifies)
//!     └──────────────┴───────────┴──── StateStore (one batch per command)
//! ```
//!
//! The host calls [`LedgerRuntime::end_block`] once per height to settle
//! expired challenges.

pub mod command;
pub mod config;
pub mod error;
pub mod registry;
pub mod runtime;
pub mod telemetry;

pub use command::{Command, CommandResult};
pub use config::{ConfigError, RuntimeConfig, TomlParamsProvider};
pub use error::{ErrorKind, LedgerError};
pub use registry::{lookup, message_types, MessageType};
pub use runtime::LedgerRuntime;
pub use telemetry::{init_tracing, TelemetryError};
