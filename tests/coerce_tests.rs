use chart_sampling::Scalar;
use chrono::{TimeZone, Utc};

#[test]
fn test_number_passes_through() {
    assert_eq!(Scalar::Number(42.5).to_f64(), 42.5);
    assert_eq!(Scalar::Number(-0.0).to_f64(), 0.0);
}

#[test]
fn test_timestamp_to_epoch_millis() {
    let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    assert_eq!(Scalar::Timestamp(t).to_f64(), t.timestamp_millis() as f64);
}

#[test]
fn test_rfc3339_string_matches_timestamp() {
    let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let s = Scalar::from("2024-03-01T12:00:00Z");
    assert_eq!(s.to_f64(), Scalar::Timestamp(t).to_f64());
}

#[test]
fn test_date_only_string() {
    let t = Utc.with_ymd_and_hms(2021, 7, 15, 0, 0, 0).unwrap();
    assert_eq!(
        Scalar::from("2021-07-15").to_f64(),
        t.timestamp_millis() as f64
    );
}

#[test]
fn test_datetime_without_zone() {
    let t = Utc.with_ymd_and_hms(2021, 7, 15, 8, 30, 0).unwrap();
    assert_eq!(
        Scalar::from("2021-07-15 08:30:00").to_f64(),
        t.timestamp_millis() as f64
    );
}

#[test]
fn test_numeric_string_fallback() {
    assert_eq!(Scalar::from("12.25").to_f64(), 12.25);
    assert_eq!(Scalar::from("  -3 ").to_f64(), -3.0);
}

#[test]
fn test_garbage_degrades_to_zero() {
    assert_eq!(Scalar::from("not a date").to_f64(), 0.0);
    assert_eq!(Scalar::from("").to_f64(), 0.0);
    assert_eq!(Scalar::from("2024-13-45").to_f64(), 0.0);
}

#[test]
fn test_scalar_serde_untagged() {
    let n: Scalar = serde_json::from_str("3.5").unwrap();
    assert_eq!(n, Scalar::Number(3.5));

    let t: Scalar = serde_json::from_str("\"2024-03-01T12:00:00Z\"").unwrap();
    assert!(matches!(t, Scalar::Timestamp(_)));

    let s: Scalar = serde_json::from_str("\"sensor-7\"").unwrap();
    assert_eq!(s, Scalar::Text("sensor-7".to_string()));
}
