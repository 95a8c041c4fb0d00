//! # Inbound Ports (Driving Ports / API)

use crate::domain::approval::Approval;
use crate::domain::errors::ApprovalError;
use shared_types::{Address, Height};

/// Approval verification API.
///
/// Stateless: the answer depends only on the arguments.
pub trait ApprovalApi: Send + Sync {
    /// `true` iff `current_height <= expired_height` and `signature` over
    /// `message` was produced by `signer`.
    fn verify(
        &self,
        signer: &Address,
        message: &[u8],
        signature: &[u8],
        expired_height: Height,
        current_height: Height,
    ) -> bool {
        self.check(signer, message, signature, expired_height, current_height)
            .is_ok()
    }

    /// Same predicate as [`ApprovalApi::verify`], reporting why it failed.
    fn check(
        &self,
        signer: &Address,
        message: &[u8],
        signature: &[u8],
        expired_height: Height,
        current_height: Height,
    ) -> Result<(), ApprovalError>;

    /// Check an [`Approval`] record over `message`.
    fn check_approval(
        &self,
        signer: &Address,
        message: &[u8],
        approval: &Approval,
        current_height: Height,
    ) -> Result<(), ApprovalError> {
        self.check(
            signer,
            message,
            &approval.sig,
            approval.expired_height,
            current_height,
        )
    }
}
