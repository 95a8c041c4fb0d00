//! # Inbound Ports

use crate::domain::entities::Object;
use crate::domain::errors::ObjectResult;
use crate::domain::messages::{MsgCreateObject, MsgSealObject};
use shared_types::ObjectId;

/// Object ledger API.
pub trait ObjectLedgerApi: Send + Sync {
    /// Register an object in CREATED status and assign its id.
    fn create_object(&self, msg: &MsgCreateObject) -> ObjectResult<Object>;

    /// Move a CREATED object to SEALED.
    fn seal_object(&self, msg: &MsgSealObject) -> ObjectResult<Object>;

    fn get_object(&self, id: ObjectId) -> ObjectResult<Option<Object>>;
}
