use chart_sampling::sampling::evaluate_sampling_methods;
use chart_sampling::{DataPoint, SamplingMethod};

fn sine_series(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| DataPoint::new(i as f64, (i as f64 * 0.05).sin() * 40.0))
        .collect()
}

#[test]
fn test_short_circuit_when_no_reduction_needed() {
    let data = sine_series(50);
    let report = evaluate_sampling_methods(&data, 100);
    assert_eq!(report.best_method, SamplingMethod::None);
    assert_eq!(report.scores.len(), 1);
    assert_eq!(report.scores[&SamplingMethod::None], 1.0);
}

#[test]
fn test_scores_cover_all_three_methods() {
    let data = sine_series(2000);
    let report = evaluate_sampling_methods(&data, 100);

    assert_eq!(report.scores.len(), 3);
    for method in [
        SamplingMethod::Lttb,
        SamplingMethod::NthPoint,
        SamplingMethod::DouglasPeucker,
    ] {
        let score = report.scores[&method];
        assert!((0.0..=1.0).contains(&score), "{method:?} scored {score}");
    }
}

#[test]
fn test_best_method_has_top_score() {
    let data = sine_series(2000);
    let report = evaluate_sampling_methods(&data, 100);

    let best = report.scores[&report.best_method];
    for score in report.scores.values() {
        assert!(best >= *score);
    }
}

#[test]
fn test_flat_line_scores_perfect_shape_fit() {
    let data: Vec<DataPoint> = (0..1000).map(|i| DataPoint::new(i as f64, 7.0)).collect();
    let report = evaluate_sampling_methods(&data, 50);

    // Any subsequence of a straight line reproduces it exactly.
    assert!(report.scores[&SamplingMethod::Lttb] > 0.99);
    assert!(report.scores[&SamplingMethod::DouglasPeucker] > 0.99);
}

#[test]
fn test_report_serializes() {
    let data = sine_series(500);
    let report = evaluate_sampling_methods(&data, 50);
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("best_method"));
}
