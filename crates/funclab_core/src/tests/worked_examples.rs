//! Textbook cases checked through evaluation, sampling and analysis together

use crate::analysis::{Analysis, ExpBehavior, RealRoots, analyze};
use crate::evaluate::evaluate;
use crate::model::{Domain, ExponentialParams, LinearParams, ModelParams, QuadraticParams};
use crate::sampler::sample_simulator;

/// Line with slope 2 and intercept 1 over [-10, 10] in half steps
#[test]
fn test_line_slope_two_intercept_one() {
    let model = ModelParams::Linear(LinearParams::new(2.0, 1.0));
    let points = sample_simulator(&model, &Domain::new(-10.0, 10.0, 0.5)).unwrap();

    let at_zero = points.iter().find(|p| p.x == 0.0).unwrap();
    assert_eq!(at_zero.y, 1.0);
    assert_eq!(points.len(), 41);

    match analyze(&model) {
        Analysis::Linear(a) => assert_eq!(a.root, Some(-0.5)),
        other => panic!("expected linear analysis, got {other:?}"),
    }
}

/// x² - 6x + 5 = (x - 5)(x - 1)
#[test]
fn test_parabola_with_two_roots() {
    let model = ModelParams::Quadratic(QuadraticParams::new(1.0, -6.0, 5.0));

    let Analysis::Quadratic(a) = analyze(&model) else {
        panic!("expected quadratic analysis");
    };
    let vertex = a.vertex.unwrap();
    assert_eq!((vertex.x, vertex.y), (3.0, -4.0));
    assert_eq!(a.discriminant, 16.0);
    assert_eq!(a.roots, RealRoots::Two(5.0, 1.0));

    for root in [5.0, 1.0] {
        assert_eq!(evaluate(&model, root).primary(), Some(0.0));
    }
}

/// 100 · 0.95^10 ≈ 59.87, a decaying quantity
#[test]
fn test_decay_after_ten_periods() {
    let model = ModelParams::ExponentialGrowthDecay(ExponentialParams::new(0.95, 100.0));
    let y = evaluate(&model, 10.0).primary().unwrap();
    assert!((y - 59.87).abs() < 0.005, "got {y}");

    let Analysis::Exponential(a) = analyze(&model) else {
        panic!("expected exponential analysis");
    };
    assert_eq!(a.behavior, ExpBehavior::Decay);
    assert_eq!(a.y_intercept, Some(100.0));
}

/// Root count follows the sign of the discriminant
#[test]
fn test_discriminant_predicts_root_count() {
    let cases = [
        (QuadraticParams::new(1.0, 0.0, 1.0), 0),
        (QuadraticParams::new(1.0, 2.0, 1.0), 1),
        (QuadraticParams::new(2.0, -3.0, -5.0), 2),
        (QuadraticParams::new(-0.5, 1.0, 4.0), 2),
    ];

    for (params, expected) in cases {
        let Analysis::Quadratic(a) = analyze(&ModelParams::Quadratic(params)) else {
            panic!("expected quadratic analysis");
        };
        assert_eq!(a.roots.count(), Some(expected), "{params:?}");
        assert_eq!(a.vertex.unwrap().x, -params.b / (2.0 * params.a));
    }
}
