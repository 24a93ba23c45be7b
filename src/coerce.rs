//! Numeric coercion of heterogeneous x-axis scalars.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::data_types::Scalar;

impl Scalar {
    /// Coerces the scalar to an f64 for distance and area math.
    ///
    /// Numbers pass through, timestamps become epoch milliseconds, text is
    /// tried as an RFC 3339 timestamp, then as a bare date or datetime, then
    /// as a float. Anything unparseable degrades to 0.0 rather than failing:
    /// the samplers call this in tight loops and must never see an error.
    pub fn to_f64(&self) -> f64 {
        match self {
            Scalar::Number(v) => *v,
            Scalar::Timestamp(t) => t.timestamp_millis() as f64,
            Scalar::Text(s) => coerce_text(s),
        }
    }
}

fn coerce_text(s: &str) -> f64 {
    let s = s.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return t.timestamp_millis() as f64;
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return t.and_utc().timestamp_millis() as f64;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(t) = d.and_hms_opt(0, 0, 0) {
            return t.and_utc().timestamp_millis() as f64;
        }
    }
    s.parse::<f64>().unwrap_or(0.0)
}
