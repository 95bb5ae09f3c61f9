//! Point evaluation for every function family
//!
//! Evaluation is pure: the same parameters and x always give the same result.
//! Inputs outside a family's real domain produce [`Evaluation::Undefined`]
//! rather than an error, and callers treat that as "no point".

use crate::model::{
    ComparisonParams, DataPoint, ExponentialParams, LinearParams, ModelParams, QuadraticParams,
};

/// Result of evaluating a model at a single x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Single(f64),
    /// Comparison families yield one value per series
    Pair(f64, f64),
    /// The family has no real value here (e.g. exponential with base <= 0)
    Undefined,
}

impl Evaluation {
    /// The first series value, if any.
    pub fn primary(&self) -> Option<f64> {
        match *self {
            Evaluation::Single(y) | Evaluation::Pair(y, _) => Some(y),
            Evaluation::Undefined => None,
        }
    }

    pub fn into_point(self, x: f64) -> Option<DataPoint> {
        match self {
            Evaluation::Single(y) => Some(DataPoint::new(x, y)),
            Evaluation::Pair(y, y2) => Some(DataPoint::pair(x, y, y2)),
            Evaluation::Undefined => None,
        }
    }
}

/// Evaluate `model` at `x`.
pub fn evaluate(model: &ModelParams, x: f64) -> Evaluation {
    match model {
        ModelParams::Linear(p) | ModelParams::LinearSimple(p) => Evaluation::Single(linear(p, x)),
        ModelParams::Quadratic(p) => Evaluation::Single(quadratic(p, x)),
        ModelParams::ExponentialGrowthDecay(p) => match exponential(p, x) {
            Some(y) => Evaluation::Single(y),
            None => Evaluation::Undefined,
        },
        ModelParams::LinearComparison(ComparisonParams { first, second }) => {
            Evaluation::Pair(linear(first, x), linear(second, x))
        }
    }
}

#[inline]
pub fn linear(p: &LinearParams, x: f64) -> f64 {
    p.m * x + p.n
}

#[inline]
pub fn quadratic(p: &QuadraticParams, x: f64) -> f64 {
    p.a * x * x + p.b * x + p.c
}

/// `None` when `base` is not strictly positive; the family has no complex results.
#[inline]
pub fn exponential(p: &ExponentialParams, x: f64) -> Option<f64> {
    // `!(base > 0)` also catches NaN
    if !(p.base > 0.0) {
        return None;
    }
    Some(p.k * p.base.powf(x))
}
