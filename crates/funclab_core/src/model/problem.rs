use serde::{Deserialize, Serialize};

use super::{Domain, FunctionFamily, ModelParams, ProblemId};

/// Axis and series captions shown alongside a problem's plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    pub x: String,
    pub y: String,
    pub series1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series2: Option<String>,
}

/// Input range of a problem: the sampled interval plus the starting value
/// of the "current input" slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_val: f64,
}

impl ProblemRange {
    pub fn domain(&self) -> Domain {
        Domain::new(self.min, self.max, self.step)
    }

    /// Clamp an input value into `[min, max]`. An inverted range pins to `max`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// A named scenario in the problem catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemModel {
    pub id: ProblemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_custom: bool,
    /// Stored inline as `family` and `params`
    #[serde(flatten)]
    pub model: ModelParams,
    pub labels: Labels,
    pub range: ProblemRange,
}

impl ProblemModel {
    pub fn family(&self) -> FunctionFamily {
        self.model.family()
    }
}
