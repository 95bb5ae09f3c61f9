use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The closed set of function shapes the engine knows how to evaluate.
///
/// `LinearSimple` and `LinearComparison` are the scenario flavours used by the
/// problem catalog; the remaining three are the free-range simulator families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionFamily {
    Linear,
    Quadratic,
    ExponentialGrowthDecay,
    LinearSimple,
    LinearComparison,
}

impl FunctionFamily {
    pub const ALL: [FunctionFamily; 5] = [
        FunctionFamily::Linear,
        FunctionFamily::Quadratic,
        FunctionFamily::ExponentialGrowthDecay,
        FunctionFamily::LinearSimple,
        FunctionFamily::LinearComparison,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FunctionFamily::Linear => "Linear",
            FunctionFamily::Quadratic => "Quadratic",
            FunctionFamily::ExponentialGrowthDecay => "Exponential",
            FunctionFamily::LinearSimple => "Linear (simple)",
            FunctionFamily::LinearComparison => "Linear (comparison)",
        }
    }

    /// Families that produce a second series (`y2`).
    pub fn is_comparison(&self) -> bool {
        matches!(self, FunctionFamily::LinearComparison)
    }

    /// Parameter names in the order accepted by [`ModelParams::from_values`].
    ///
    /// [`ModelParams::from_values`]: super::ModelParams::from_values
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            FunctionFamily::Linear | FunctionFamily::LinearSimple => &["m", "n"],
            FunctionFamily::Quadratic => &["a", "b", "c"],
            FunctionFamily::ExponentialGrowthDecay => &["base", "k"],
            FunctionFamily::LinearComparison => &["m1", "n1", "m2", "n2"],
        }
    }
}

impl fmt::Display for FunctionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FunctionFamily {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "linear" => Ok(FunctionFamily::Linear),
            "quadratic" => Ok(FunctionFamily::Quadratic),
            "exponential" | "exponentialgrowthdecay" => Ok(FunctionFamily::ExponentialGrowthDecay),
            "linearsimple" => Ok(FunctionFamily::LinearSimple),
            "linearcomparison" | "comparison" => Ok(FunctionFamily::LinearComparison),
            _ => Err(ModelError::UnknownFamily(s.to_string())),
        }
    }
}
