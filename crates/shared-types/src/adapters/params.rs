use crate::errors::ParamsError;
use crate::params::{ChallengeParams, ParamStore, Params};
use parking_lot::RwLock;

/// Parameter store holding a fixed snapshot, updatable only through
/// [`ParamStore::set_challenge_params`].
#[derive(Debug)]
pub struct StaticParamStore {
    params: RwLock<Params>,
}

impl StaticParamStore {
    /// Create a store after validating the parameter set.
    pub fn new(params: Params) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            params: RwLock::new(params),
        })
    }
}

impl ParamStore for StaticParamStore {
    fn params(&self) -> Params {
        self.params.read().clone()
    }

    fn set_challenge_params(&self, params: ChallengeParams) -> Result<(), ParamsError> {
        params.validate()?;
        self.params.write().challenge = params;
        Ok(())
    }
}
