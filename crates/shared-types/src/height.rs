//! # Block Height Port
//!
//! Height is the only notion of time in the ledger; every deadline is a
//! height, never a wall-clock timestamp.

use crate::entities::Height;

/// Read-only view of the host's current block height.
///
/// Heights are monotonically non-decreasing.
pub trait BlockHeightSource: Send + Sync {
    /// Height of the block currently being executed.
    fn current_height(&self) -> Height;
}
