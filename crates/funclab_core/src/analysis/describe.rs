use serde::Serialize;

use super::{
    Analysis, ComparisonAnalysis, Concavity, ExpBehavior, ExponentialAnalysis, LinearAnalysis,
    Point, QuadraticAnalysis, RealRoots, Trend,
};
use crate::format::format_fixed;

const NOT_APPLICABLE: &str = "N/A";

/// One labelled fact ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisLine {
    pub label: String,
    pub value: String,
}

impl AnalysisLine {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Analysis {
    /// Render to display lines with two-decimal values.
    pub fn describe(&self) -> Vec<AnalysisLine> {
        match self {
            Analysis::Linear(a) => describe_linear(a, ""),
            Analysis::Quadratic(a) => describe_quadratic(a),
            Analysis::Exponential(a) => describe_exponential(a),
            Analysis::Comparison(a) => describe_comparison(a),
        }
    }
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_APPLICABLE.to_string(), format_fixed)
}

fn point(p: &Point) -> String {
    format!("({}, {})", format_fixed(p.x), format_fixed(p.y))
}

fn describe_linear(a: &LinearAnalysis, prefix: &str) -> Vec<AnalysisLine> {
    let trend = match a.trend {
        Trend::Increasing => "Increasing",
        Trend::Decreasing => "Decreasing",
        Trend::Constant => "Constant",
    };
    vec![
        AnalysisLine::new(format!("{prefix}Trend"), trend),
        AnalysisLine::new(format!("{prefix}Slope"), format_fixed(a.slope)),
        AnalysisLine::new(format!("{prefix}Y-intercept"), format_fixed(a.y_intercept)),
        AnalysisLine::new(format!("{prefix}X-intercept"), optional(a.root)),
    ]
}

fn describe_quadratic(a: &QuadraticAnalysis) -> Vec<AnalysisLine> {
    let concavity = match a.concavity {
        Concavity::Convex => "Convex (opens upward)",
        Concavity::Concave => "Concave (opens downward)",
        Concavity::Degenerate => "Degenerate (a = 0, linear)",
    };
    let roots = match a.roots {
        RealRoots::None => "No real roots".to_string(),
        RealRoots::One(x) => format!("x = {}", format_fixed(x)),
        RealRoots::Two(x1, x2) => format!("x₁ = {}, x₂ = {}", format_fixed(x1), format_fixed(x2)),
        RealRoots::Degenerate => NOT_APPLICABLE.to_string(),
    };
    vec![
        AnalysisLine::new("Concavity", concavity),
        AnalysisLine::new(
            "Vertex",
            a.vertex.as_ref().map_or_else(|| NOT_APPLICABLE.to_string(), point),
        ),
        AnalysisLine::new("Discriminant", format_fixed(a.discriminant)),
        AnalysisLine::new("Roots", roots),
    ]
}

fn describe_exponential(a: &ExponentialAnalysis) -> Vec<AnalysisLine> {
    let behavior = match a.behavior {
        ExpBehavior::Growth => "Growth",
        ExpBehavior::Decay => "Decay",
        ExpBehavior::Constant => "Constant",
        ExpBehavior::Undefined => NOT_APPLICABLE,
    };
    let asymptote = if a.behavior == ExpBehavior::Undefined {
        NOT_APPLICABLE.to_string()
    } else {
        format!("y = {}", crate::format::format_number(a.asymptote))
    };
    vec![
        AnalysisLine::new("Behavior", behavior),
        AnalysisLine::new("Y-intercept", optional(a.y_intercept)),
        AnalysisLine::new("Asymptote", asymptote),
    ]
}

fn describe_comparison(a: &ComparisonAnalysis) -> Vec<AnalysisLine> {
    let mut lines = describe_linear(&a.first, "f: ");
    lines.extend(describe_linear(&a.second, "g: "));
    lines.push(AnalysisLine::new(
        "Intersection",
        a.intersection
            .as_ref()
            .map_or_else(|| "None".to_string(), point),
    ));
    lines
}
