//! # Integration Flows
//!
//! Each module drives the full runtime through dispatch and the height hook.

mod codec;
mod erasure_coded;
mod expiry;
mod lifecycle;
