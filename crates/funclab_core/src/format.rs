//! Number and equation formatting for display and report export

use crate::model::{ComparisonParams, ExponentialParams, LinearParams, ModelParams, QuadraticParams};

/// Format with exactly two decimals, e.g. `59.87`.
pub fn format_fixed(value: f64) -> String {
    let s = format!("{value:.2}");
    if s == "-0.00" { "0.00".to_string() } else { s }
}

/// Format with up to two decimals and no trailing zeros, e.g. `2`, `1.05`, `0.5`.
pub fn format_number(value: f64) -> String {
    let fixed = format_fixed(value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Equation with the current parameter values substituted.
///
/// ```
/// use funclab_core::format::equation;
/// use funclab_core::model::{LinearParams, ModelParams};
///
/// let model = ModelParams::Linear(LinearParams::new(2.0, 1.0));
/// assert_eq!(equation(&model), "f(x) = 2x + 1");
/// ```
pub fn equation(model: &ModelParams) -> String {
    match model {
        ModelParams::Linear(p) | ModelParams::LinearSimple(p) => {
            format!("f(x) = {}", linear_rhs(p))
        }
        ModelParams::Quadratic(p) => format!("f(x) = {}", quadratic_rhs(p)),
        ModelParams::ExponentialGrowthDecay(p) => format!("f(x) = {}", exponential_rhs(p)),
        ModelParams::LinearComparison(ComparisonParams { first, second }) => {
            format!("f(x) = {}; g(x) = {}", linear_rhs(first), linear_rhs(second))
        }
    }
}

fn linear_rhs(p: &LinearParams) -> String {
    polynomial(&[(p.m, "x"), (p.n, "")])
}

fn quadratic_rhs(p: &QuadraticParams) -> String {
    polynomial(&[(p.a, "x²"), (p.b, "x"), (p.c, "")])
}

fn exponential_rhs(p: &ExponentialParams) -> String {
    format!("{} · ({})^x", format_number(p.k), format_number(p.base))
}

/// Join `coefficient·variable` terms, dropping zero terms and writing unit
/// coefficients as a bare variable. A polynomial with no non-zero terms is `0`.
fn polynomial(terms: &[(f64, &str)]) -> String {
    let mut out = String::new();

    for &(coefficient, variable) in terms {
        let magnitude = format_number(coefficient.abs());
        if magnitude == "0" {
            continue;
        }
        let negative = coefficient < 0.0;

        let body = if !variable.is_empty() && magnitude == "1" {
            variable.to_string()
        } else {
            format!("{magnitude}{variable}")
        };

        if out.is_empty() {
            if negative {
                out.push('-');
            }
        } else {
            out.push_str(if negative { " - " } else { " + " });
        }
        out.push_str(&body);
    }

    if out.is_empty() { "0".to_string() } else { out }
}
