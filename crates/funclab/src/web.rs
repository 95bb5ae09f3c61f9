//! Browser entry point.
//!
//! Exposes the engine to a JavaScript front end. Structured values cross the
//! boundary as JSON strings; ids of saved simulations are passed as decimal
//! strings because they do not fit a JS number safely.

use funclab_core::catalog::ProblemDraft;
use funclab_core::model::{Domain, FunctionFamily, ModelParams, ProblemId, SimulationId};
use funclab_core::report::DEFAULT_PROBLEM_ROWS;
use funclab_core::{ScenarioStore, SimulationStore, Simulator};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::platform::WebStorage;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::debug!("funclab web module loaded");
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    Ok(serde_json::to_string(value)?)
}

fn parse_simulation_id(id: &str) -> Result<SimulationId, JsError> {
    Ok(SimulationId(id.trim().parse()?))
}

/// Simulator plus both catalogs, backed by LocalStorage.
#[wasm_bindgen]
pub struct FunctionLab {
    problems: ScenarioStore<WebStorage>,
    sims: SimulationStore<WebStorage>,
    simulator: Simulator,
}

#[wasm_bindgen]
impl FunctionLab {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FunctionLab {
        FunctionLab {
            problems: ScenarioStore::new(WebStorage::new()),
            sims: SimulationStore::new(WebStorage::new()),
            simulator: Simulator::default(),
        }
    }

    // ------------------------------------------------------------------
    // Simulator
    // ------------------------------------------------------------------

    pub fn family(&self) -> String {
        self.simulator.family().to_string()
    }

    /// Changing family resets parameters to that family's defaults.
    pub fn switch_family(&mut self, family: &str) -> Result<(), JsError> {
        let family: FunctionFamily = family.parse()?;
        self.simulator.switch_family(family);
        Ok(())
    }

    /// Positional parameters for the current family.
    pub fn set_params(&mut self, values: Vec<f64>) -> Result<(), JsError> {
        let model = ModelParams::from_values(self.simulator.family(), &values)?;
        self.simulator.set_model(model);
        Ok(())
    }

    pub fn params(&self) -> Vec<f64> {
        self.simulator.model().values()
    }

    pub fn set_domain(&mut self, min: f64, max: f64, step: f64) -> Result<(), JsError> {
        self.simulator.set_domain(Domain::new(min, max, step))?;
        Ok(())
    }

    pub fn equation(&self) -> String {
        self.simulator.equation()
    }

    /// JSON array of `{x, y, y2?}` points.
    pub fn sample(&self) -> Result<String, JsError> {
        to_json(&self.simulator.sample()?)
    }

    /// JSON point, or `null` where the function is undefined.
    pub fn evaluate_at(&self, x: f64) -> Result<String, JsError> {
        to_json(&self.simulator.evaluate_at(x))
    }

    /// JSON array of `{label, value}` lines.
    pub fn analysis(&self) -> Result<String, JsError> {
        to_json(&self.simulator.analysis().describe())
    }

    pub fn simulation_report(&self, name: &str) -> Result<String, JsError> {
        to_json(&self.simulator.report(name)?)
    }

    // ------------------------------------------------------------------
    // Problems
    // ------------------------------------------------------------------

    pub fn problems(&self) -> Result<String, JsError> {
        to_json(self.problems.problems())
    }

    pub fn active_problem(&self) -> Result<String, JsError> {
        to_json(self.problems.active())
    }

    pub fn select_problem(&mut self, id: &str) -> Result<(), JsError> {
        self.problems.select(&ProblemId::new(id))?;
        Ok(())
    }

    pub fn current_value(&self) -> f64 {
        self.problems.current_value()
    }

    /// Returns the value actually applied after clamping.
    pub fn set_current_value(&mut self, value: f64) -> Result<f64, JsError> {
        Ok(self.problems.set_current_value(value)?)
    }

    pub fn evaluate_current(&self) -> Result<String, JsError> {
        to_json(&self.problems.evaluate_current())
    }

    pub fn sample_active(&self) -> Result<String, JsError> {
        to_json(&self.problems.sample_active()?)
    }

    /// Create from a JSON draft; returns the new id. The new problem becomes active.
    pub fn create_problem(&mut self, draft: &str) -> Result<String, JsError> {
        let draft: ProblemDraft = serde_json::from_str(draft)?;
        Ok(self.problems.create(draft)?.id.to_string())
    }

    pub fn delete_problem(&mut self, id: &str) -> Result<(), JsError> {
        self.problems.delete(&ProblemId::new(id))?;
        Ok(())
    }

    /// Report for the active problem; `rows = 0` uses the default row count.
    pub fn problem_report(&self, rows: usize) -> Result<String, JsError> {
        let rows = if rows == 0 { DEFAULT_PROBLEM_ROWS } else { rows };
        to_json(&self.problems.report_active(rows)?)
    }

    // ------------------------------------------------------------------
    // Saved simulations
    // ------------------------------------------------------------------

    pub fn saved_simulations(&self) -> Result<String, JsError> {
        to_json(self.sims.list())
    }

    /// Snapshot the simulator's current parameters; returns the new id.
    pub fn save_simulation(&mut self, name: &str) -> Result<String, JsError> {
        let saved = self.sims.save(name, *self.simulator.model())?;
        Ok(saved.id.to_string())
    }

    /// Restore a snapshot's parameters into the simulator.
    pub fn replay_simulation(&mut self, id: &str) -> Result<(), JsError> {
        let model = self.sims.replay(parse_simulation_id(id)?)?;
        self.simulator.set_model(model);
        Ok(())
    }

    pub fn delete_simulation(&mut self, id: &str) -> Result<(), JsError> {
        self.sims.delete(parse_simulation_id(id)?)?;
        Ok(())
    }
}

impl Default for FunctionLab {
    fn default() -> Self {
        Self::new()
    }
}
