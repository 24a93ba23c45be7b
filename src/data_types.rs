// Data structures for the sampling core

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An x-axis value as supplied by callers: already-numeric, a timestamp, or
/// raw text (typically an ISO date). Coercion to f64 lives in [`crate::coerce`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Number(v)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(t: DateTime<Utc>) -> Self {
        Scalar::Timestamp(t)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// A single sample. `extra` is carried through every sampler untouched, so
/// callers can hang labels or source metadata off individual points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: Scalar,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl DataPoint {
    pub fn new(x: impl Into<Scalar>, y: f64) -> Self {
        Self {
            x: x.into(),
            y,
            extra: None,
        }
    }

    /// Coerced x coordinate, usable for distance/area math.
    pub fn x_value(&self) -> f64 {
        self.x.to_f64()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SamplingMethod {
    Lttb,
    NthPoint,
    DouglasPeucker,
    MinMax,
    Adaptive,
    #[default]
    Auto,
    None,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SamplingOptions {
    pub method: SamplingMethod,
    pub target_points: usize,
    pub preserve_extremes: bool,
    /// Optional hint from the chart settings ("line", "scatter", ...). The
    /// core does not act on it today; it is plumbed through for callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_time_series: Option<bool>,
    /// Overrides the adaptive selector's direct-LTTB cutoff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<usize>,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            method: SamplingMethod::Auto,
            target_points: 1000,
            preserve_extremes: true,
            chart_type: None,
            is_time_series: None,
            threshold: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SamplingResult {
    pub data: Vec<DataPoint>,
    pub original_count: usize,
    pub sampled_count: usize,
    /// The method that actually ran, which can differ from the requested one
    /// (identity work is reported as `None`, `Auto` resolves to `Adaptive`).
    pub method: SamplingMethod,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LodLevel {
    Low,
    Medium,
    High,
}

/// Display parameters for one detail tier. Derived per render pass from
/// density and zoom, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LodConfig {
    pub level: LodLevel,
    pub max_points: usize,
    pub show_grid: bool,
    pub show_labels: bool,
    pub show_markers: bool,
    pub marker_size: f32,
    pub line_width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    Svg,
    Canvas,
    Webgl,
}
