use chart_sampling::sampling::sample_min_max;
use chart_sampling::DataPoint;

#[test]
fn test_square_wave_keeps_both_rails() {
    let data: Vec<DataPoint> = (0..1000)
        .map(|i| {
            let y = if (i / 50) % 2 == 0 { -5.0 } else { 5.0 };
            DataPoint::new(i as f64, y)
        })
        .collect();

    let sampled = sample_min_max(&data, 40);
    assert!(sampled.len() <= 40);
    assert!(sampled.iter().any(|p| p.y == 5.0));
    assert!(sampled.iter().any(|p| p.y == -5.0));
}

#[test]
fn test_output_bound() {
    let data: Vec<DataPoint> = (0..10_000)
        .map(|i| DataPoint::new(i as f64, (i as f64 * 0.01).sin()))
        .collect();

    for target in [2usize, 11, 100, 1001] {
        let sampled = sample_min_max(&data, target);
        assert!(sampled.len() <= target, "target {target} gave {}", sampled.len());
    }
}

#[test]
fn test_chronological_order() {
    let data: Vec<DataPoint> = (0..500)
        .map(|i| DataPoint::new(i as f64, (i as f64 * 0.37).sin() * 10.0))
        .collect();

    let sampled = sample_min_max(&data, 60);
    let mut last = -1.0;
    for p in &sampled {
        assert!(p.x_value() > last);
        last = p.x_value();
    }
}

#[test]
fn test_small_input_identity() {
    let data: Vec<DataPoint> = (0..7).map(|i| DataPoint::new(i as f64, 1.0)).collect();
    assert_eq!(sample_min_max(&data, 10), data);
}

#[test]
fn test_nan_values_are_skipped() {
    let data: Vec<DataPoint> = (0..100)
        .map(|i| {
            let y = if i % 3 == 0 { f64::NAN } else { i as f64 };
            DataPoint::new(i as f64, y)
        })
        .collect();

    let sampled = sample_min_max(&data, 20);
    assert!(!sampled.is_empty());
    assert!(sampled.iter().all(|p| !p.y.is_nan()));
}
