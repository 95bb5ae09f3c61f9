use crate::model::{FunctionFamily, ProblemId, SimulationId};

/// Errors raised while building parameters or sampling domains
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("unknown function family '{0}'")]
    UnknownFamily(String),
    #[error("{family} takes {expected} parameters, got {got}")]
    ParameterCount {
        family: FunctionFamily,
        expected: usize,
        got: usize,
    },
    #[error("parameter {name} must be finite (got {value})")]
    NonFiniteParameter { name: &'static str, value: f64 },
    #[error("invalid domain: {0}")]
    InvalidDomain(&'static str),
}

/// Errors from the problem and saved-simulation catalogs.
///
/// None of these are fatal: every one leaves the catalog in a valid state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("problem '{0}' not found")]
    ProblemNotFound(ProblemId),
    #[error("saved simulation {0} not found")]
    SimulationNotFound(SimulationId),
    #[error("problem '{0}' is built in and cannot be deleted")]
    BuiltInImmutable(ProblemId),
    #[error("a title is required to create a problem")]
    MissingTitle,
    #[error("a name is required to save a simulation")]
    MissingName,
    #[error("value must be finite (got {0})")]
    NonFiniteValue(f64),
}

/// Errors from a [`KeyValueStore`](crate::storage::KeyValueStore) backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    /// Read or write failure (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// Backend missing or full (e.g. LocalStorage disabled)
    #[error("Storage not available: {0}")]
    NotAvailable(String),
}
