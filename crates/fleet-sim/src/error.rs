use fleet_core::ResourceId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Double initialization is a programmer error: silently resetting would
    /// corrupt in-flight route progress.  Call `reset()` first if a fresh
    /// fleet is really intended.
    #[error("store already initialized with {resources} resources")]
    AlreadyInitialized { resources: usize },

    #[error("duplicate resource id {0} in fleet")]
    DuplicateResource(ResourceId),

    /// Non-fatal: the request layer maps this to its 404 equivalent.
    #[error("resource {0} is not tracked")]
    ResourceNotFound(ResourceId),
}

pub type SimResult<T> = Result<T, SimError>;
