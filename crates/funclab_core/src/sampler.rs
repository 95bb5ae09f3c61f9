//! Turns a model into an ordered sequence of plottable points.
//!
//! x values are generated by index and rounded to a fixed number of decimals
//! before evaluation, so repeated additions of `step` never accumulate into
//! jittered or near-duplicate abscissae. Points whose value is undefined,
//! non-finite or outside the configured magnitude envelope are left out.

use crate::error::ModelError;
use crate::evaluate::{Evaluation, evaluate};
use crate::model::{DataPoint, Domain, ModelParams};

/// Upper bound on points produced by a single call
pub const MAX_SAMPLES: usize = 100_000;

/// Tolerance used when counting grid steps so `max` survives float error
const GRID_EPSILON: f64 = 1e-9;

/// Rounding and filtering rules for one kind of consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerSettings {
    /// Decimal places x is rounded to before evaluation
    pub decimals: u32,
    /// Points with any `|value| >= max_abs_y` are dropped
    pub max_abs_y: Option<f64>,
}

impl SamplerSettings {
    /// Free-range simulator: one decimal, curve kept within `|y| < 200`.
    pub const SIMULATOR: SamplerSettings = SamplerSettings {
        decimals: 1,
        max_abs_y: Some(200.0),
    };

    /// Scenario plots: two decimals, ranges are pre-tuned so no envelope.
    pub const SCENARIO: SamplerSettings = SamplerSettings {
        decimals: 2,
        max_abs_y: None,
    };

    fn accepts(&self, value: f64) -> bool {
        value.is_finite() && self.max_abs_y.is_none_or(|limit| value.abs() < limit)
    }

    fn accepts_evaluation(&self, eval: &Evaluation) -> bool {
        match *eval {
            Evaluation::Single(y) => self.accepts(y),
            Evaluation::Pair(y, y2) => self.accepts(y) && self.accepts(y2),
            Evaluation::Undefined => false,
        }
    }
}

/// Round `x` to `decimals` places.
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (x * factor).round() / factor;
    // Normalize -0.0 so it never shows up as a distinct abscissa
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Sample `model` over `domain`.
///
/// Returns every accepted point in strictly increasing x order. An invalid
/// domain (non-positive step, `min > max`, non-finite bounds) is a caller
/// error.
pub fn sample(
    model: &ModelParams,
    domain: &Domain,
    settings: &SamplerSettings,
) -> Result<Vec<DataPoint>, ModelError> {
    domain.validate()?;

    let steps = ((domain.max - domain.min) / domain.step + GRID_EPSILON).floor();
    if steps >= MAX_SAMPLES as f64 {
        return Err(ModelError::InvalidDomain("step too small for domain"));
    }
    let steps = steps as usize;

    let mut points = Vec::with_capacity(steps + 1);
    let mut last_x: Option<f64> = None;

    for i in 0..=steps {
        let x = round_to(domain.min + i as f64 * domain.step, settings.decimals);
        if !domain.contains(x) || last_x.is_some_and(|prev| x <= prev) {
            continue;
        }
        last_x = Some(x);

        let eval = evaluate(model, x);
        if settings.accepts_evaluation(&eval)
            && let Some(point) = eval.into_point(x)
        {
            points.push(point);
        }
    }

    Ok(points)
}

/// Sample with the simulator's rules.
pub fn sample_simulator(model: &ModelParams, domain: &Domain) -> Result<Vec<DataPoint>, ModelError> {
    sample(model, domain, &SamplerSettings::SIMULATOR)
}

/// Sample with the scenario rules.
pub fn sample_scenario(model: &ModelParams, domain: &Domain) -> Result<Vec<DataPoint>, ModelError> {
    sample(model, domain, &SamplerSettings::SCENARIO)
}

/// Evaluate at a single user-chosen x, rounded the same way the sampler would.
pub fn evaluate_at(model: &ModelParams, x: f64, decimals: u32) -> Option<DataPoint> {
    let x = round_to(x, decimals);
    evaluate(model, x).into_point(x)
}
