//! Parameter records for each function family.
//!
//! Every family carries only its own fields, so a quadratic can never be
//! asked for a slope and a line can never be missing one.

use serde::{Deserialize, Serialize};

use super::FunctionFamily;
use crate::error::ModelError;

/// `y = m·x + n`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    /// Slope
    pub m: f64,
    /// Intercept
    pub n: f64,
}

impl LinearParams {
    pub fn new(m: f64, n: f64) -> Self {
        Self { m, n }
    }
}

/// `y = a·x² + b·x + c`. `a = 0` is allowed and degenerates to a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticParams {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

/// `y = k·base^x`. Only real-valued for `base > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialParams {
    pub base: f64,
    /// Initial value at `x = 0`
    pub k: f64,
}

impl ExponentialParams {
    pub fn new(base: f64, k: f64) -> Self {
        Self { base, k }
    }
}

/// Two independent lines plotted against the same x axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonParams {
    pub first: LinearParams,
    pub second: LinearParams,
}

impl ComparisonParams {
    pub fn new(first: LinearParams, second: LinearParams) -> Self {
        Self { first, second }
    }
}

/// A family together with its parameters.
///
/// The variant fixes the family for the lifetime of the value; switching
/// family means building a new `ModelParams`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", content = "params", rename_all = "camelCase")]
pub enum ModelParams {
    Linear(LinearParams),
    Quadratic(QuadraticParams),
    ExponentialGrowthDecay(ExponentialParams),
    LinearSimple(LinearParams),
    LinearComparison(ComparisonParams),
}

impl ModelParams {
    pub fn family(&self) -> FunctionFamily {
        match self {
            ModelParams::Linear(_) => FunctionFamily::Linear,
            ModelParams::Quadratic(_) => FunctionFamily::Quadratic,
            ModelParams::ExponentialGrowthDecay(_) => FunctionFamily::ExponentialGrowthDecay,
            ModelParams::LinearSimple(_) => FunctionFamily::LinearSimple,
            ModelParams::LinearComparison(_) => FunctionFamily::LinearComparison,
        }
    }

    /// Starting parameters used when the simulator switches to `family`.
    pub fn default_for(family: FunctionFamily) -> Self {
        match family {
            FunctionFamily::Linear => ModelParams::Linear(LinearParams::new(1.0, 0.0)),
            FunctionFamily::Quadratic => ModelParams::Quadratic(QuadraticParams::new(1.0, 0.0, 0.0)),
            FunctionFamily::ExponentialGrowthDecay => {
                ModelParams::ExponentialGrowthDecay(ExponentialParams::new(2.0, 1.0))
            }
            FunctionFamily::LinearSimple => ModelParams::LinearSimple(LinearParams::new(1.0, 0.0)),
            FunctionFamily::LinearComparison => ModelParams::LinearComparison(
                ComparisonParams::new(LinearParams::new(1.0, 0.0), LinearParams::new(2.0, 0.0)),
            ),
        }
    }

    /// Build parameters from positional values, in the order given by
    /// [`FunctionFamily::parameter_names`].
    pub fn from_values(family: FunctionFamily, values: &[f64]) -> Result<Self, ModelError> {
        let expected = family.parameter_names().len();
        if values.len() != expected {
            return Err(ModelError::ParameterCount {
                family,
                expected,
                got: values.len(),
            });
        }
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ModelError::NonFiniteParameter {
                name: family.parameter_names()[i],
                value: *v,
            });
        }

        let params = match family {
            FunctionFamily::Linear => ModelParams::Linear(LinearParams::new(values[0], values[1])),
            FunctionFamily::LinearSimple => {
                ModelParams::LinearSimple(LinearParams::new(values[0], values[1]))
            }
            FunctionFamily::Quadratic => {
                ModelParams::Quadratic(QuadraticParams::new(values[0], values[1], values[2]))
            }
            FunctionFamily::ExponentialGrowthDecay => {
                ModelParams::ExponentialGrowthDecay(ExponentialParams::new(values[0], values[1]))
            }
            FunctionFamily::LinearComparison => ModelParams::LinearComparison(ComparisonParams::new(
                LinearParams::new(values[0], values[1]),
                LinearParams::new(values[2], values[3]),
            )),
        };
        Ok(params)
    }

    /// Parameter values in positional order; the inverse of [`ModelParams::from_values`].
    pub fn values(&self) -> Vec<f64> {
        match self {
            ModelParams::Linear(p) | ModelParams::LinearSimple(p) => vec![p.m, p.n],
            ModelParams::Quadratic(p) => vec![p.a, p.b, p.c],
            ModelParams::ExponentialGrowthDecay(p) => vec![p.base, p.k],
            ModelParams::LinearComparison(p) => {
                vec![p.first.m, p.first.n, p.second.m, p.second.n]
            }
        }
    }
}
