//! Function exploration engine
//!
//! This crate evaluates, samples and analyzes a small set of parametric
//! function families and manages the catalogs built on top of them:
//! - Linear, quadratic and exponential models as a tagged parameter union
//! - Deterministic sampling with x rounding and a magnitude envelope
//! - Closed-form analysis (roots, vertex, discriminant, growth/decay)
//! - A problem catalog of built-in and custom scenarios
//! - Saved simulator snapshots
//! - Equation strings and report tables for document export
//!
//! Persistence goes through the [`storage::KeyValueStore`] port; the engine
//! itself performs no I/O.
//!
//! ```
//! use funclab_core::model::{Domain, LinearParams, ModelParams};
//! use funclab_core::sampler::sample_simulator;
//!
//! let model = ModelParams::Linear(LinearParams::new(2.0, 1.0));
//! let points = sample_simulator(&model, &Domain::new(-10.0, 10.0, 0.5)).unwrap();
//! assert_eq!(points.len(), 41);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod evaluate;
pub mod format;
pub mod report;
pub mod sampler;
pub mod simulator;

// ============================================================================
// Catalog and persistence modules
// ============================================================================

pub mod catalog;
pub mod storage;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{Analysis, analyze};
pub use catalog::{ProblemDraft, ScenarioStore, SimulationStore};
pub use error::{CatalogError, ModelError, StorageError};
pub use evaluate::{Evaluation, evaluate};
pub use sampler::{SamplerSettings, sample};
pub use simulator::Simulator;
