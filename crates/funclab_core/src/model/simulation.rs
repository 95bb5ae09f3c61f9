use serde::{Deserialize, Serialize};

use super::{ModelParams, SimulationId};

/// A named snapshot of the free-range simulator's parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSimulation {
    pub id: SimulationId,
    pub name: String,
    /// Stored inline as `family` and `params`
    #[serde(flatten)]
    pub model: ModelParams,
    pub timestamp: jiff::Timestamp,
}
