use crate::entities::Height;
use crate::height::BlockHeightSource;
use std::sync::atomic::{AtomicU64, Ordering};

/// Height source driven by the host (or a test) one block at a time.
///
/// Heights never move backwards: setting a lower height is ignored.
#[derive(Debug, Default)]
pub struct ManualHeight {
    height: AtomicU64,
}

impl ManualHeight {
    pub fn new(height: Height) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    /// Move to `height`, returning the height now in effect.
    pub fn set(&self, height: Height) -> Height {
        let previous = self.height.fetch_max(height, Ordering::SeqCst);
        previous.max(height)
    }

    /// Advance by `blocks` and return the new height.
    pub fn advance(&self, blocks: u64) -> Height {
        self.height.fetch_add(blocks, Ordering::SeqCst) + blocks
    }
}

impl BlockHeightSource for ManualHeight {
    fn current_height(&self) -> Height {
        self.height.load(Ordering::SeqCst)
    }
}
