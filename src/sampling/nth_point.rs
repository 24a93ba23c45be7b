use crate::data_types::DataPoint;

use super::common::index_buckets;

/// Plain Nth-Point decimation: emit every `step`-th element.
///
/// The stride is rounded up so the output never exceeds `target_points`;
/// the last point is force-included when the stride misses it. Pure index
/// selection: y is never inspected, so isolated spikes can be dropped.
/// That is a documented weakness of the method, not a bug.
pub fn sample_nth_point(data: &[DataPoint], target_points: usize) -> Vec<DataPoint> {
    let n = data.len();
    if n <= target_points || target_points == 0 {
        return data.to_vec();
    }

    let step = n.div_ceil(target_points).max(1);
    let mut out: Vec<DataPoint> = data.iter().step_by(step).cloned().collect();

    if out.last() != data.last() {
        if out.len() < target_points {
            out.push(data[n - 1].clone());
        } else if let Some(last) = out.last_mut() {
            *last = data[n - 1].clone();
        }
    }
    out
}

/// Stratified Nth-Point: one point from the middle of each of
/// `target_points` equal-width index strata.
///
/// Spreads coverage more evenly than the plain stride and is the default
/// nth-point variant used by the dispatcher and the adaptive chains.
pub fn sample_stratified(data: &[DataPoint], target_points: usize) -> Vec<DataPoint> {
    let n = data.len();
    if n <= target_points || target_points == 0 {
        return data.to_vec();
    }

    index_buckets(n, target_points)
        .into_iter()
        .map(|r| data[r.start + r.len() / 2].clone())
        .collect()
}

/// Indices the stratified variant would select, without cloning points.
/// Used by the quality evaluator's gap-uniformity score.
pub fn stratified_indices(n: usize, target_points: usize) -> Vec<usize> {
    if n <= target_points || target_points == 0 {
        return (0..n).collect();
    }
    index_buckets(n, target_points)
        .into_iter()
        .map(|r| r.start + r.len() / 2)
        .collect()
}
