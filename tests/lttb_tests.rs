use chart_sampling::sampling::sample_lttb;
use chart_sampling::DataPoint;

fn sine_wave(count: usize, amplitude: f64) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            DataPoint::new(x, (x * 0.1).sin() * amplitude)
        })
        .collect()
}

#[test]
fn test_lttb_sine_wave() {
    let count = 100;
    let data = sine_wave(count, 1.0);

    let target = 10;
    let sampled = sample_lttb(&data, target);

    assert_eq!(sampled.len(), target);

    // Check start and end
    assert_eq!(sampled[0].x_value(), 0.0);
    assert_eq!(sampled[target - 1].x_value(), (count - 1) as f64);

    // Check monotony of X
    let mut last_x = -1.0;
    for p in &sampled {
        assert!(p.x_value() > last_x);
        last_x = p.x_value();
    }
}

#[test]
fn test_lttb_small_data() {
    let data: Vec<DataPoint> = (0..5).map(|i| DataPoint::new(i as f64, i as f64)).collect();

    let sampled = sample_lttb(&data, 10);
    assert_eq!(sampled.len(), 5);
    assert_eq!(sampled, data);
}

#[test]
fn test_lttb_target_below_three_is_identity() {
    let data: Vec<DataPoint> = (0..50).map(|i| DataPoint::new(i as f64, i as f64)).collect();

    assert_eq!(sample_lttb(&data, 2).len(), 50);
    assert_eq!(sample_lttb(&data, 1).len(), 50);
}

#[test]
fn test_lttb_exactly_three() {
    for count in [3usize, 10, 1000] {
        let data = sine_wave(count, 1.0);
        assert_eq!(sample_lttb(&data, 3).len(), 3);
    }
}

#[test]
fn test_lttb_preserves_peak() {
    // 0, 0, 100, 0, 0 with 3 output points must keep the spike.
    let data = vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(1.0, 0.0),
        DataPoint::new(2.0, 100.0),
        DataPoint::new(3.0, 0.0),
        DataPoint::new(4.0, 0.0),
    ];

    let sampled = sample_lttb(&data, 3);
    assert_eq!(sampled.len(), 3);
    assert_eq!(sampled[0].y, 0.0);
    assert_eq!(sampled[1].x_value(), 2.0);
    assert_eq!(sampled[1].y, 100.0);
    assert_eq!(sampled[2].x_value(), 4.0);
}

#[test]
fn test_lttb_sine_preserves_global_extremes() {
    let data = sine_wave(1000, 50.0);
    let original_max = data.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let original_min = data.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);

    let sampled = sample_lttb(&data, 100);
    assert_eq!(sampled.len(), 100);

    let sampled_max = sampled.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let sampled_min = sampled.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);

    assert!((original_max - sampled_max).abs() < 5.0);
    assert!((original_min - sampled_min).abs() < 5.0);
}

#[test]
fn test_lttb_carries_extra_fields() {
    let mut data = sine_wave(100, 1.0);
    for p in &mut data {
        p.extra = Some(serde_json::json!({"tag": "sensor-a"}));
    }

    let sampled = sample_lttb(&data, 10);
    for p in &sampled {
        assert_eq!(p.extra, Some(serde_json::json!({"tag": "sensor-a"})));
    }
}
