use jiff::Timestamp;

use crate::error::CatalogError;
use crate::model::{ModelParams, SavedSimulation, SimulationId};
use crate::storage::{KeyValueStore, SIMULATIONS_KEY, load_list, save_list};

/// Named snapshots of the free-range simulator, kept in save order.
pub struct SimulationStore<S: KeyValueStore> {
    storage: S,
    simulations: Vec<SavedSimulation>,
    last_issued: u64,
}

impl<S: KeyValueStore> SimulationStore<S> {
    pub fn new(storage: S) -> Self {
        let mut simulations: Vec<SavedSimulation> = Vec::new();
        for stored in load_list::<SavedSimulation>(&storage, SIMULATIONS_KEY) {
            if simulations.iter().any(|s| s.id == stored.id) {
                tracing::warn!(id = %stored.id, "Ignoring saved simulation with duplicate id");
                continue;
            }
            simulations.push(stored);
        }

        let last_issued = simulations.iter().map(|s| s.id.0).max().unwrap_or(0);
        Self {
            storage,
            simulations,
            last_issued,
        }
    }

    pub fn list(&self) -> &[SavedSimulation] {
        &self.simulations
    }

    pub fn get(&self, id: SimulationId) -> Option<&SavedSimulation> {
        self.simulations.iter().find(|s| s.id == id)
    }

    /// Save a snapshot of `model` under `name`. The name is required.
    pub fn save(&mut self, name: &str, model: ModelParams) -> Result<&SavedSimulation, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::MissingName);
        }

        let timestamp = Timestamp::now();
        let millis = u64::try_from(timestamp.as_millisecond()).unwrap_or(0);
        let id = SimulationId(millis.max(self.last_issued.saturating_add(1)));
        self.last_issued = id.0;

        self.simulations.push(SavedSimulation {
            id,
            name: name.to_string(),
            model,
            timestamp,
        });
        self.persist();
        tracing::info!(%id, name, "Saved simulation");

        Ok(&self.simulations[self.simulations.len() - 1])
    }

    /// Parameters to restore into the simulator.
    pub fn replay(&self, id: SimulationId) -> Result<ModelParams, CatalogError> {
        self.get(id)
            .map(|s| s.model)
            .ok_or(CatalogError::SimulationNotFound(id))
    }

    /// Remove exactly the entry with `id`; the rest keep their order.
    pub fn delete(&mut self, id: SimulationId) -> Result<SavedSimulation, CatalogError> {
        let index = self
            .simulations
            .iter()
            .position(|s| s.id == id)
            .ok_or(CatalogError::SimulationNotFound(id))?;

        let removed = self.simulations.remove(index);
        self.persist();
        tracing::info!(%id, "Deleted saved simulation");
        Ok(removed)
    }

    fn persist(&self) {
        if let Err(e) = save_list(&self.storage, SIMULATIONS_KEY, &self.simulations) {
            tracing::error!(error = %e, "Failed to persist saved simulations");
        }
    }
}
