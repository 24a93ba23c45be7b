use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data_types::{DataPoint, SamplingMethod};

use super::lttb::sample_lttb;
use super::nth_point::sample_stratified;

/// At or under this size the adaptive chain runs LTTB in a single pass.
pub const DIRECT_LTTB_MAX: usize = 5_000;
/// At or under this size a stratified pre-pass bounds the LTTB input.
pub const TWO_STAGE_MAX: usize = 50_000;
/// Above this size `optimal_sampling_method` always picks the adaptive chain.
const FORCE_ADAPTIVE_ABOVE: usize = 10_000;
/// How many leading points the characteristics probe inspects.
const PROBE_LIMIT: usize = 100;

/// Size-tiered sampling chain with the default stage thresholds.
pub fn sample_adaptive(data: &[DataPoint], target_points: usize) -> Vec<DataPoint> {
    sample_adaptive_with_threshold(data, target_points, None)
}

/// Size-tiered sampling chain.
///
/// Small inputs go straight to LTTB; mid-sized inputs get a stratified
/// pre-pass down to `2 * target_points` so the quadratic-feeling LTTB scan
/// stays cheap; very large inputs add a third stage through 5000 points
/// first. `threshold` overrides the direct-LTTB cutoff.
pub fn sample_adaptive_with_threshold(
    data: &[DataPoint],
    target_points: usize,
    threshold: Option<usize>,
) -> Vec<DataPoint> {
    let n = data.len();
    if n <= target_points {
        return data.to_vec();
    }

    let direct_max = threshold.unwrap_or(DIRECT_LTTB_MAX);
    if n <= direct_max {
        debug!(points = n, target = target_points, "adaptive: direct lttb");
        return sample_lttb(data, target_points);
    }

    if n <= TWO_STAGE_MAX {
        debug!(points = n, target = target_points, "adaptive: two-stage");
        let coarse = sample_stratified(data, target_points * 2);
        return sample_lttb(&coarse, target_points);
    }

    debug!(points = n, target = target_points, "adaptive: three-stage");
    let coarse = sample_stratified(data, DIRECT_LTTB_MAX);
    let mid = sample_stratified(&coarse, target_points * 2);
    sample_lttb(&mid, target_points)
}

/// What the head-of-series probe found out about the data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataCharacteristics {
    /// Strictly increasing coerced x over the probed prefix.
    pub is_time_series: bool,
    /// Y standard deviation exceeds 20% of the mean magnitude.
    pub high_variance: bool,
    /// Points per unit of probed x-range; 0.0 when the range is degenerate.
    pub density: f64,
    /// Number of points actually inspected.
    pub probed: usize,
}

/// Probes up to the first 100 points to classify the series.
pub fn analyze_data_characteristics(data: &[DataPoint]) -> DataCharacteristics {
    let probed = data.len().min(PROBE_LIMIT);
    if probed == 0 {
        return DataCharacteristics {
            is_time_series: false,
            high_variance: false,
            density: 0.0,
            probed: 0,
        };
    }

    let head = &data[..probed];
    let xs: Vec<f64> = head.iter().map(|p| p.x_value()).collect();
    let is_time_series = probed > 1 && xs.windows(2).all(|w| w[1] > w[0]);

    let mean = head.iter().map(|p| p.y).sum::<f64>() / probed as f64;
    let variance = head.iter().map(|p| (p.y - mean).powi(2)).sum::<f64>() / probed as f64;
    let high_variance = mean != 0.0 && variance.sqrt() > mean.abs() * 0.2;

    let (min_x, max_x) = xs
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    let range = max_x - min_x;
    let density = if range > 0.0 {
        data.len() as f64 / range
    } else {
        0.0
    };

    DataCharacteristics {
        is_time_series,
        high_variance,
        density,
        probed,
    }
}

/// Picks a method from the data shape: no-op when the data already fits,
/// the adaptive chain above 10000 points regardless of ratio, LTTB for
/// monotonic (time-series) data, Douglas-Peucker otherwise.
pub fn optimal_sampling_method(data: &[DataPoint], target_points: usize) -> SamplingMethod {
    if data.len() <= target_points {
        return SamplingMethod::None;
    }
    if data.len() > FORCE_ADAPTIVE_ABOVE {
        return SamplingMethod::Adaptive;
    }
    if analyze_data_characteristics(data).is_time_series {
        SamplingMethod::Lttb
    } else {
        SamplingMethod::DouglasPeucker
    }
}
