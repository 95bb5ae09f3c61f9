//! Closed-form analysis of each function family.
//!
//! Everything here works on the full-precision parameters. Rounding happens
//! only when results are turned into display lines via [`Analysis::describe`].
//! Degenerate inputs (zero slope, zero leading coefficient, non-positive
//! exponential base) are explicit branches, never a division by zero.

mod describe;

use serde::Serialize;

pub use describe::AnalysisLine;

use crate::evaluate::quadratic;
use crate::model::{ComparisonParams, ExponentialParams, LinearParams, ModelParams, QuadraticParams};

/// A point in the plane, used for vertices and intersections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Increasing,
    Decreasing,
    Constant,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearAnalysis {
    pub trend: Trend,
    pub slope: f64,
    pub y_intercept: f64,
    /// `-n/m`; `None` for horizontal lines
    pub root: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Concavity {
    /// `a > 0`, opens upward
    Convex,
    /// `a < 0`, opens downward
    Concave,
    /// `a = 0`, the parabola has collapsed into a line
    Degenerate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RealRoots {
    None,
    One(f64),
    /// `(-b + √Δ) / 2a` first, then `(-b - √Δ) / 2a`
    Two(f64, f64),
    /// Leading coefficient is zero; the quadratic formula does not apply
    Degenerate,
}

impl RealRoots {
    pub fn count(&self) -> Option<usize> {
        match self {
            RealRoots::None => Some(0),
            RealRoots::One(_) => Some(1),
            RealRoots::Two(..) => Some(2),
            RealRoots::Degenerate => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuadraticAnalysis {
    pub concavity: Concavity,
    pub vertex: Option<Point>,
    pub discriminant: f64,
    pub roots: RealRoots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpBehavior {
    Growth,
    Decay,
    /// `base = 1`
    Constant,
    /// `base <= 0`, no real values
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExponentialAnalysis {
    pub behavior: ExpBehavior,
    /// `k`, or `None` when the function is undefined
    pub y_intercept: Option<f64>,
    /// Horizontal asymptote, always `y = 0` for this family
    pub asymptote: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonAnalysis {
    pub first: LinearAnalysis,
    pub second: LinearAnalysis,
    /// Where the two lines cross; `None` when they are parallel or identical
    pub intersection: Option<Point>,
}

/// Analytical facts derived from a model's parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Analysis {
    Linear(LinearAnalysis),
    Quadratic(QuadraticAnalysis),
    Exponential(ExponentialAnalysis),
    Comparison(ComparisonAnalysis),
}

pub fn analyze(model: &ModelParams) -> Analysis {
    match model {
        ModelParams::Linear(p) | ModelParams::LinearSimple(p) => Analysis::Linear(analyze_linear(p)),
        ModelParams::Quadratic(p) => Analysis::Quadratic(analyze_quadratic(p)),
        ModelParams::ExponentialGrowthDecay(p) => Analysis::Exponential(analyze_exponential(p)),
        ModelParams::LinearComparison(p) => Analysis::Comparison(analyze_comparison(p)),
    }
}

pub fn analyze_linear(p: &LinearParams) -> LinearAnalysis {
    let trend = if p.m > 0.0 {
        Trend::Increasing
    } else if p.m < 0.0 {
        Trend::Decreasing
    } else {
        Trend::Constant
    };

    LinearAnalysis {
        trend,
        slope: p.m,
        y_intercept: p.n,
        root: (p.m != 0.0).then(|| -p.n / p.m),
    }
}

pub fn analyze_quadratic(p: &QuadraticParams) -> QuadraticAnalysis {
    let discriminant = p.b * p.b - 4.0 * p.a * p.c;

    if p.a == 0.0 {
        return QuadraticAnalysis {
            concavity: Concavity::Degenerate,
            vertex: None,
            discriminant,
            roots: RealRoots::Degenerate,
        };
    }

    let concavity = if p.a > 0.0 {
        Concavity::Convex
    } else {
        Concavity::Concave
    };

    let two_a = 2.0 * p.a;
    let vertex_x = -p.b / two_a;
    let vertex = Point {
        x: vertex_x,
        y: quadratic(p, vertex_x),
    };

    let roots = if discriminant < 0.0 {
        RealRoots::None
    } else if discriminant == 0.0 {
        RealRoots::One(vertex_x)
    } else {
        let sqrt_d = discriminant.sqrt();
        RealRoots::Two((-p.b + sqrt_d) / two_a, (-p.b - sqrt_d) / two_a)
    };

    QuadraticAnalysis {
        concavity,
        vertex: Some(vertex),
        discriminant,
        roots,
    }
}

pub fn analyze_exponential(p: &ExponentialParams) -> ExponentialAnalysis {
    let behavior = if !(p.base > 0.0) {
        ExpBehavior::Undefined
    } else if p.base > 1.0 {
        ExpBehavior::Growth
    } else if p.base < 1.0 {
        ExpBehavior::Decay
    } else {
        ExpBehavior::Constant
    };

    ExponentialAnalysis {
        behavior,
        y_intercept: (behavior != ExpBehavior::Undefined).then_some(p.k),
        asymptote: 0.0,
    }
}

pub fn analyze_comparison(p: &ComparisonParams) -> ComparisonAnalysis {
    let ComparisonParams { first, second } = p;
    let slope_gap = first.m - second.m;

    let intersection = (slope_gap != 0.0).then(|| {
        let x = (second.n - first.n) / slope_gap;
        Point {
            x,
            y: first.m * x + first.n,
        }
    });

    ComparisonAnalysis {
        first: analyze_linear(first),
        second: analyze_linear(second),
        intersection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_trend_and_root() {
        let a = analyze_linear(&LinearParams::new(2.0, 1.0));
        assert_eq!(a.trend, Trend::Increasing);
        assert_eq!(a.y_intercept, 1.0);
        assert_eq!(a.root, Some(-0.5));

        assert_eq!(analyze_linear(&LinearParams::new(-3.0, 6.0)).trend, Trend::Decreasing);
        assert_eq!(analyze_linear(&LinearParams::new(-3.0, 6.0)).root, Some(2.0));
    }

    #[test]
    fn test_horizontal_line_has_no_root() {
        let a = analyze_linear(&LinearParams::new(0.0, 4.0));
        assert_eq!(a.trend, Trend::Constant);
        assert_eq!(a.root, None);
    }

    #[test]
    fn test_quadratic_two_roots_plus_first() {
        let a = analyze_quadratic(&QuadraticParams::new(1.0, -6.0, 5.0));
        assert_eq!(a.concavity, Concavity::Convex);
        assert_eq!(a.vertex, Some(Point { x: 3.0, y: -4.0 }));
        assert_eq!(a.discriminant, 16.0);
        assert_eq!(a.roots, RealRoots::Two(5.0, 1.0));
    }

    #[test]
    fn test_quadratic_double_root() {
        let a = analyze_quadratic(&QuadraticParams::new(1.0, -4.0, 4.0));
        assert_eq!(a.discriminant, 0.0);
        assert_eq!(a.roots, RealRoots::One(2.0));
    }

    #[test]
    fn test_quadratic_no_real_roots_concave() {
        let a = analyze_quadratic(&QuadraticParams::new(-1.0, 0.0, -1.0));
        assert_eq!(a.concavity, Concavity::Concave);
        assert!(a.discriminant < 0.0);
        assert_eq!(a.roots, RealRoots::None);
        assert_eq!(a.roots.count(), Some(0));
    }

    #[test]
    fn test_quadratic_degenerate_leading_coefficient() {
        let a = analyze_quadratic(&QuadraticParams::new(0.0, 2.0, 1.0));
        assert_eq!(a.concavity, Concavity::Degenerate);
        assert_eq!(a.vertex, None);
        assert_eq!(a.roots, RealRoots::Degenerate);
        assert_eq!(a.discriminant, 4.0);
    }

    #[test]
    fn test_exponential_classification() {
        let growth = analyze_exponential(&ExponentialParams::new(1.05, 10.0));
        assert_eq!(growth.behavior, ExpBehavior::Growth);
        assert_eq!(growth.y_intercept, Some(10.0));
        assert_eq!(growth.asymptote, 0.0);

        let decay = analyze_exponential(&ExponentialParams::new(0.95, 100.0));
        assert_eq!(decay.behavior, ExpBehavior::Decay);

        let flat = analyze_exponential(&ExponentialParams::new(1.0, 3.0));
        assert_eq!(flat.behavior, ExpBehavior::Constant);

        let undefined = analyze_exponential(&ExponentialParams::new(-1.0, 3.0));
        assert_eq!(undefined.behavior, ExpBehavior::Undefined);
        assert_eq!(undefined.y_intercept, None);
    }

    #[test]
    fn test_comparison_intersection() {
        let a = analyze_comparison(&ComparisonParams::new(
            LinearParams::new(0.5, 20.0),
            LinearParams::new(0.75, 10.0),
        ));
        assert_eq!(a.intersection, Some(Point { x: 40.0, y: 40.0 }));

        let parallel = analyze_comparison(&ComparisonParams::new(
            LinearParams::new(1.0, 0.0),
            LinearParams::new(1.0, 5.0),
        ));
        assert_eq!(parallel.intersection, None);
    }
}
