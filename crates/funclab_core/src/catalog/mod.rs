//! Persisted catalogs: problem scenarios and saved simulator snapshots.
//!
//! Both catalogs own their entries outright and are the only place those
//! entries are mutated. They load once on construction and rewrite their
//! persisted subset after every successful mutation.

mod builtins;
mod draft;
mod scenario_store;
mod simulation_store;

pub use builtins::{
    DRUG_DECAY, PHONE_PLANS, POPULATION_GROWTH, TAXI_FARE, builtin_problems, is_builtin,
};
pub use draft::{
    DEFAULT_BASE, DEFAULT_INITIAL, DEFAULT_INTERCEPT, DEFAULT_RANGE, DEFAULT_SECOND_INTERCEPT,
    DEFAULT_SECOND_SLOPE, DEFAULT_SLOPE, DraftLabels, DraftModel, DraftRange, ProblemDraft,
};
pub use scenario_store::ScenarioStore;
pub use simulation_store::SimulationStore;
