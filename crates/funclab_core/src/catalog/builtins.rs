//! The fixed problem catalog shipped with the engine.

use crate::model::{
    ComparisonParams, ExponentialParams, Labels, LinearParams, ModelParams, ProblemId,
    ProblemModel, ProblemRange,
};

pub const TAXI_FARE: &str = "taxi-fare";
pub const PHONE_PLANS: &str = "phone-plans";
pub const POPULATION_GROWTH: &str = "population-growth";
pub const DRUG_DECAY: &str = "drug-decay";

/// Built-in problems in catalog order. The first entry is the initial selection.
pub fn builtin_problems() -> Vec<ProblemModel> {
    vec![
        ProblemModel {
            id: ProblemId::new(TAXI_FARE),
            title: "Taxi fare".to_string(),
            description: "A taxi charges a flat 4.00 pickup fee plus 2.50 per kilometre. \
                          How does the fare grow with distance?"
                .to_string(),
            is_custom: false,
            model: ModelParams::LinearSimple(LinearParams::new(2.5, 4.0)),
            labels: labels("Distance (km)", "Fare", "Fare", None),
            range: range(0.0, 20.0, 1.0, 5.0),
        },
        ProblemModel {
            id: ProblemId::new(PHONE_PLANS),
            title: "Phone plans".to_string(),
            description: "Plan A costs 20 per month plus 0.50 per minute, plan B costs 10 \
                          per month plus 0.75 per minute. When is each plan cheaper?"
                .to_string(),
            is_custom: false,
            model: ModelParams::LinearComparison(ComparisonParams::new(
                LinearParams::new(0.5, 20.0),
                LinearParams::new(0.75, 10.0),
            )),
            labels: labels("Minutes", "Monthly cost", "Plan A", Some("Plan B")),
            range: range(0.0, 100.0, 5.0, 40.0),
        },
        ProblemModel {
            id: ProblemId::new(POPULATION_GROWTH),
            title: "Population growth".to_string(),
            description: "A town of 1000 people grows by 5% every year.".to_string(),
            is_custom: false,
            model: ModelParams::ExponentialGrowthDecay(ExponentialParams::new(1.05, 1000.0)),
            labels: labels("Years", "Population", "Population", None),
            range: range(0.0, 30.0, 1.0, 10.0),
        },
        ProblemModel {
            id: ProblemId::new(DRUG_DECAY),
            title: "Drug elimination".to_string(),
            description: "A 100 mg dose is eliminated at 5% per hour.".to_string(),
            is_custom: false,
            model: ModelParams::ExponentialGrowthDecay(ExponentialParams::new(0.95, 100.0)),
            labels: labels("Hours", "Remaining (mg)", "Remaining", None),
            range: range(0.0, 48.0, 2.0, 10.0),
        },
    ]
}

pub fn is_builtin(id: &ProblemId) -> bool {
    [TAXI_FARE, PHONE_PLANS, POPULATION_GROWTH, DRUG_DECAY].contains(&id.as_str())
}

fn labels(x: &str, y: &str, series1: &str, series2: Option<&str>) -> Labels {
    Labels {
        x: x.to_string(),
        y: y.to_string(),
        series1: series1.to_string(),
        series2: series2.map(str::to_string),
    }
}

fn range(min: f64, max: f64, step: f64, default_val: f64) -> ProblemRange {
    ProblemRange {
        min,
        max,
        step,
        default_val,
    }
}
