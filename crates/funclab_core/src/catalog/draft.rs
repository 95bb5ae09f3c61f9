//! User input for creating a custom problem.
//!
//! Every numeric field is optional. Missing or non-finite values are replaced
//! by fixed family defaults when the draft is turned into a [`ProblemModel`].

use serde::{Deserialize, Serialize};

use crate::model::{
    ComparisonParams, ExponentialParams, Labels, LinearParams, ModelParams, ProblemId,
    ProblemModel, ProblemRange,
};

pub const DEFAULT_SLOPE: f64 = 1.0;
pub const DEFAULT_INTERCEPT: f64 = 0.0;
pub const DEFAULT_SECOND_SLOPE: f64 = 2.0;
pub const DEFAULT_SECOND_INTERCEPT: f64 = 0.0;
pub const DEFAULT_BASE: f64 = 1.1;
pub const DEFAULT_INITIAL: f64 = 10.0;

pub const DEFAULT_RANGE: ProblemRange = ProblemRange {
    min: 0.0,
    max: 10.0,
    step: 1.0,
    default_val: 0.0,
};

/// Family and (partial) parameters of a custom problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "camelCase")]
pub enum DraftModel {
    LinearSimple {
        m: Option<f64>,
        n: Option<f64>,
    },
    LinearComparison {
        m1: Option<f64>,
        n1: Option<f64>,
        m2: Option<f64>,
        n2: Option<f64>,
    },
    ExponentialGrowthDecay {
        base: Option<f64>,
        k: Option<f64>,
    },
}

impl Default for DraftModel {
    fn default() -> Self {
        DraftModel::LinearSimple { m: None, n: None }
    }
}

impl DraftModel {
    pub fn resolve(&self) -> ModelParams {
        match *self {
            DraftModel::LinearSimple { m, n } => ModelParams::LinearSimple(LinearParams::new(
                or_default(m, DEFAULT_SLOPE),
                or_default(n, DEFAULT_INTERCEPT),
            )),
            DraftModel::LinearComparison { m1, n1, m2, n2 } => {
                ModelParams::LinearComparison(ComparisonParams::new(
                    LinearParams::new(or_default(m1, DEFAULT_SLOPE), or_default(n1, DEFAULT_INTERCEPT)),
                    LinearParams::new(
                        or_default(m2, DEFAULT_SECOND_SLOPE),
                        or_default(n2, DEFAULT_SECOND_INTERCEPT),
                    ),
                ))
            }
            DraftModel::ExponentialGrowthDecay { base, k } => ModelParams::ExponentialGrowthDecay(
                ExponentialParams::new(or_default(base, DEFAULT_BASE), or_default(k, DEFAULT_INITIAL)),
            ),
        }
    }

    fn is_comparison(&self) -> bool {
        matches!(self, DraftModel::LinearComparison { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftLabels {
    pub x: Option<String>,
    pub y: Option<String>,
    pub series1: Option<String>,
    pub series2: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub default_val: Option<f64>,
}

impl DraftRange {
    /// Fill missing bounds, falling back to [`DEFAULT_RANGE`] entirely when the
    /// supplied bounds do not form a valid domain. The default value is
    /// clamped into the range and defaults to `min`.
    pub fn resolve(&self) -> ProblemRange {
        let min = or_default(self.min, DEFAULT_RANGE.min);
        let max = or_default(self.max, DEFAULT_RANGE.max);
        let step = or_default(self.step, DEFAULT_RANGE.step);

        let mut range = ProblemRange {
            min,
            max,
            step,
            default_val: min,
        };
        if let Err(e) = range.domain().validate() {
            tracing::debug!(error = %e, "Draft range rejected, using default range");
            range = DEFAULT_RANGE;
        }

        range.default_val = self
            .default_val
            .filter(|v| v.is_finite())
            .map_or(range.min, |v| range.clamp(v));
        range
    }
}

/// A custom problem awaiting an id and default-filling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub model: DraftModel,
    #[serde(default)]
    pub labels: DraftLabels,
    #[serde(default)]
    pub range: DraftRange,
}

impl ProblemDraft {
    pub fn new(title: impl Into<String>, model: DraftModel) -> Self {
        Self {
            title: title.into(),
            model,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_range(mut self, range: DraftRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_labels(mut self, labels: DraftLabels) -> Self {
        self.labels = labels;
        self
    }

    /// `None` when the title is blank: creation is abandoned.
    pub(crate) fn into_problem(self, id: ProblemId) -> Option<ProblemModel> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return None;
        }

        let comparison = self.model.is_comparison();
        let text = |value: Option<String>, default: &str| {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let labels = Labels {
            x: text(self.labels.x, "x"),
            y: text(self.labels.y, "y"),
            series1: text(
                self.labels.series1,
                if comparison { "Option A" } else { &title },
            ),
            series2: comparison.then(|| text(self.labels.series2, "Option B")),
        };

        Some(ProblemModel {
            id,
            description: self.description.trim().to_string(),
            is_custom: true,
            model: self.model.resolve(),
            labels,
            range: self.range.resolve(),
            title,
        })
    }
}

fn or_default(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
}
