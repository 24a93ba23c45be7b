//! Offline comparison of the primitive samplers against one input.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data_types::{DataPoint, SamplingMethod};
use crate::geometry::{bounding_diagonal, perpendicular_distance};

use super::douglas_peucker::sample_douglas_peucker;
use super::lttb::sample_lttb;
use super::nth_point::stratified_indices;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QualityReport {
    pub best_method: SamplingMethod,
    /// Per-method score in [0, 1]; higher is better.
    pub scores: HashMap<SamplingMethod, f64>,
}

/// Compares LTTB, stratified Nth-Point and Douglas-Peucker on one input.
///
/// Shape-aware methods are scored by the worst perpendicular deviation of
/// any original point from the simplified polyline, normalized by the
/// bounding-box diagonal and mapped through `exp(-2 * deviation)`;
/// Nth-Point is scored by how uniform its index gaps are relative to the
/// ideal fixed stride. Diagnostic path only, not meant for the render loop.
pub fn evaluate_sampling_methods(data: &[DataPoint], target_points: usize) -> QualityReport {
    if data.len() <= target_points {
        let mut scores = HashMap::new();
        scores.insert(SamplingMethod::None, 1.0);
        return QualityReport {
            best_method: SamplingMethod::None,
            scores,
        };
    }

    // Nth-point selection is pure index arithmetic, so its score comes from
    // the stride geometry; the two shape-aware candidates run in parallel.
    let (lttb_out, dp_out) = rayon::join(
        || sample_lttb(data, target_points),
        || sample_douglas_peucker(data, target_points),
    );

    let mut scores = HashMap::new();
    scores.insert(SamplingMethod::Lttb, deviation_score(data, &lttb_out));
    scores.insert(
        SamplingMethod::NthPoint,
        uniformity_score(data.len(), target_points),
    );
    scores.insert(
        SamplingMethod::DouglasPeucker,
        deviation_score(data, &dp_out),
    );

    // Stable tie-break: first of LTTB, Nth-Point, Douglas-Peucker wins.
    let order = [
        SamplingMethod::Lttb,
        SamplingMethod::NthPoint,
        SamplingMethod::DouglasPeucker,
    ];
    let mut best_method = SamplingMethod::Lttb;
    let mut best_score = f64::NEG_INFINITY;
    for method in order {
        let score = scores[&method];
        if score > best_score {
            best_score = score;
            best_method = method;
        }
    }

    QualityReport {
        best_method,
        scores,
    }
}

/// `exp(-2 * maxDeviation / diagonal)`: 1.0 for a perfect fit, decaying as
/// the simplified polyline strays from the original points.
fn deviation_score(original: &[DataPoint], simplified: &[DataPoint]) -> f64 {
    let diagonal = bounding_diagonal(original);
    if diagonal == 0.0 {
        return 1.0;
    }
    (-2.0 * max_polyline_deviation(original, simplified) / diagonal).exp()
}

/// Worst perpendicular distance of any original point from the segment of
/// the simplified polyline whose x-span covers it. Assumes x-ordered data,
/// which is what the shape-aware samplers assume too.
fn max_polyline_deviation(original: &[DataPoint], simplified: &[DataPoint]) -> f64 {
    if simplified.len() < 2 {
        return 0.0;
    }
    let sx: Vec<f64> = simplified.iter().map(|p| p.x_value()).collect();

    let mut seg = 0usize;
    let mut max_dev = 0.0f64;
    for p in original {
        let px = p.x_value();
        while seg + 2 < sx.len() && sx[seg + 1] < px {
            seg += 1;
        }
        let d = perpendicular_distance(
            px,
            p.y,
            sx[seg],
            simplified[seg].y,
            sx[seg + 1],
            simplified[seg + 1].y,
        );
        if d > max_dev {
            max_dev = d;
        }
    }
    max_dev
}

/// 1.0 when every sampled index gap equals the ideal stride, falling off
/// with the relative spread of the gaps.
fn uniformity_score(n: usize, target_points: usize) -> f64 {
    let indices = stratified_indices(n, target_points);
    if indices.len() < 2 {
        return 1.0;
    }
    let ideal = n as f64 / target_points as f64;
    let gaps: Vec<f64> = indices.windows(2).map(|w| (w[1] - w[0]) as f64).collect();
    let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
    let variance = gaps.iter().map(|g| (g - mean).powi(2)).sum::<f64>() / gaps.len() as f64;
    (1.0 - variance.sqrt() / ideal).clamp(0.0, 1.0)
}
