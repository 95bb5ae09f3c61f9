mod family;
mod ids;
mod params;
mod point;
mod problem;
mod simulation;

pub use family::FunctionFamily;
pub use ids::{ProblemId, SimulationId};
pub use params::{ComparisonParams, ExponentialParams, LinearParams, ModelParams, QuadraticParams};
pub use point::{DataPoint, Domain};
pub use problem::{Labels, ProblemModel, ProblemRange};
pub use simulation::SavedSimulation;
