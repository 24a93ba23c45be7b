//! Public sampling entry points.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use crate::data_types::{DataPoint, SamplingMethod, SamplingOptions, SamplingResult};

use super::adaptive::sample_adaptive_with_threshold;
use super::douglas_peucker::sample_douglas_peucker;
use super::lttb::sample_lttb;
use super::min_max::sample_min_max;
use super::nth_point::sample_stratified;

/// Samples one series according to `options`.
///
/// Inputs that already fit `target_points`, and explicit `method: none`
/// requests, come back as identity results reporting `None`: the work
/// actually performed was none, regardless of what was asked for. With
/// `preserve_extremes` (the default), the original first and last points
/// are spliced back in whenever the sampler's output does not already
/// start and end with them, so extremes survival is a dispatcher-level
/// guarantee independent of the method that ran.
pub fn sample_series(data: &[DataPoint], options: &SamplingOptions) -> SamplingResult {
    let target = options.target_points.max(1);

    if data.is_empty() {
        return SamplingResult {
            data: Vec::new(),
            original_count: 0,
            sampled_count: 0,
            method: options.method,
        };
    }

    if data.len() <= target || options.method == SamplingMethod::None {
        return SamplingResult {
            data: data.to_vec(),
            original_count: data.len(),
            sampled_count: data.len(),
            method: SamplingMethod::None,
        };
    }

    let mut sampled = match options.method {
        SamplingMethod::Lttb => sample_lttb(data, target),
        SamplingMethod::NthPoint => sample_stratified(data, target),
        SamplingMethod::DouglasPeucker => sample_douglas_peucker(data, target),
        SamplingMethod::MinMax => sample_min_max(data, target),
        SamplingMethod::Adaptive | SamplingMethod::Auto => {
            sample_adaptive_with_threshold(data, target, options.threshold)
        }
        // Handled by the identity branch above.
        SamplingMethod::None => data.to_vec(),
    };

    if options.preserve_extremes {
        if sampled.first() != data.first() {
            sampled.insert(0, data[0].clone());
        }
        if sampled.last() != data.last() {
            sampled.push(data[data.len() - 1].clone());
        }
    }

    let method = match options.method {
        SamplingMethod::Auto => SamplingMethod::Adaptive,
        m => m,
    };
    debug!(
        ?method,
        original = data.len(),
        sampled = sampled.len(),
        "sampled series"
    );

    SamplingResult {
        original_count: data.len(),
        sampled_count: sampled.len(),
        method,
        data: sampled,
    }
}

/// Applies the same options to every series independently.
///
/// Series are fanned out over the rayon pool; there is no cross-series
/// coupling, so result quality and counts per series do not depend on what
/// else is in the batch.
pub fn sample_multiple_series(
    series: &HashMap<String, Vec<DataPoint>>,
    options: &SamplingOptions,
) -> HashMap<String, SamplingResult> {
    series
        .par_iter()
        .map(|(id, data)| (id.clone(), sample_series(data, options)))
        .collect()
}
