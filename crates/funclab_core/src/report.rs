//! Tabulated data handed to the report/document generator.
//!
//! The generator owns layout; this module only picks which samples go into
//! the table and formats them.

use serde::Serialize;

use crate::format::{equation, format_fixed, format_number};
use crate::model::{DataPoint, ModelParams, ProblemModel};

/// Default number of rows in a problem report
pub const DEFAULT_PROBLEM_ROWS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub x: String,
    pub y: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y2: Option<String>,
}

impl From<&DataPoint> for ReportRow {
    fn from(p: &DataPoint) -> Self {
        Self {
            x: format_number(p.x),
            y: format_fixed(p.y),
            y2: p.y2.map(format_fixed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    pub title: String,
    pub equation: String,
    pub headers: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    /// Simulator report: every other sample, starting with the first.
    pub fn for_simulation(name: &str, model: &ModelParams, points: &[DataPoint]) -> Self {
        let mut headers = vec!["x".to_string(), "f(x)".to_string()];
        if model.family().is_comparison() {
            headers.push("g(x)".to_string());
        }

        Self {
            title: name.to_string(),
            equation: equation(model),
            headers,
            rows: points.iter().step_by(2).map(ReportRow::from).collect(),
        }
    }

    /// Problem report: at most `rows` evenly spaced samples, always including
    /// the first and last.
    pub fn for_problem(problem: &ProblemModel, points: &[DataPoint], rows: usize) -> Self {
        let mut headers = vec![problem.labels.x.clone(), problem.labels.series1.clone()];
        if let Some(series2) = &problem.labels.series2 {
            headers.push(series2.clone());
        }

        Self {
            title: problem.title.clone(),
            equation: equation(&problem.model),
            headers,
            rows: evenly_spaced(points.len(), rows)
                .into_iter()
                .map(|i| ReportRow::from(&points[i]))
                .collect(),
        }
    }
}

/// Indices of up to `count` evenly spaced items out of `len`.
fn evenly_spaced(len: usize, count: usize) -> Vec<usize> {
    if len == 0 || count == 0 {
        return vec![];
    }
    if count >= len {
        return (0..len).collect();
    }
    if count == 1 {
        return vec![0];
    }

    let mut indices: Vec<usize> = (0..count)
        .map(|i| (i * (len - 1) + (count - 1) / 2) / (count - 1))
        .collect();
    indices.dedup();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ComparisonParams, Domain, Labels, LinearParams, ProblemId, ProblemRange,
    };
    use crate::sampler::{sample_scenario, sample_simulator};

    #[test]
    fn test_evenly_spaced_includes_endpoints() {
        assert_eq!(evenly_spaced(21, 6), vec![0, 4, 8, 12, 16, 20]);
        assert_eq!(evenly_spaced(3, 6), vec![0, 1, 2]);
        assert_eq!(evenly_spaced(10, 2), vec![0, 9]);
        assert_eq!(evenly_spaced(0, 6), Vec::<usize>::new());
    }

    #[test]
    fn test_simulation_report_takes_every_other_point() {
        let model = ModelParams::Linear(LinearParams::new(2.0, 1.0));
        let points = sample_simulator(&model, &Domain::new(0.0, 4.0, 1.0)).unwrap();
        let table = ReportTable::for_simulation("Line", &model, &points);

        assert_eq!(table.equation, "f(x) = 2x + 1");
        assert_eq!(table.headers, vec!["x", "f(x)"]);
        let xs: Vec<&str> = table.rows.iter().map(|r| r.x.as_str()).collect();
        assert_eq!(xs, vec!["0", "2", "4"]);
        assert_eq!(table.rows[1].y, "5.00");
        assert_eq!(table.rows[1].y2, None);
    }

    #[test]
    fn test_problem_report_uses_labels() {
        let problem = ProblemModel {
            id: ProblemId::new("phone"),
            title: "Phone plans".to_string(),
            description: String::new(),
            is_custom: false,
            model: ModelParams::LinearComparison(ComparisonParams::new(
                LinearParams::new(0.5, 20.0),
                LinearParams::new(0.75, 10.0),
            )),
            labels: Labels {
                x: "Minutes".to_string(),
                y: "Cost".to_string(),
                series1: "Plan A".to_string(),
                series2: Some("Plan B".to_string()),
            },
            range: ProblemRange {
                min: 0.0,
                max: 100.0,
                step: 5.0,
                default_val: 40.0,
            },
        };
        let points = sample_scenario(&problem.model, &problem.range.domain()).unwrap();
        let table = ReportTable::for_problem(&problem, &points, DEFAULT_PROBLEM_ROWS);

        assert_eq!(table.headers, vec!["Minutes", "Plan A", "Plan B"]);
        assert_eq!(table.rows.len(), 6);
        assert_eq!(table.rows[0].x, "0");
        assert_eq!(table.rows[5].x, "100");
        assert_eq!(table.rows[5].y, "70.00");
        assert_eq!(table.rows[5].y2.as_deref(), Some("85.00"));
    }
}
