//! Identifiers for catalog entries
//!
//! Problems and saved simulations live in separate catalogs and use separate
//! id types so one can never be looked up in the other.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a problem scenario. Built-ins use fixed well-known ids,
/// custom problems get a generated `custom-<millis>` id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(pub String);

impl ProblemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProblemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier of a saved simulator snapshot, derived from its creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationId(pub u64);

impl fmt::Display for SimulationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
