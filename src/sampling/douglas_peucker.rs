use crate::data_types::DataPoint;
use crate::geometry::{bounding_diagonal, perpendicular_distance};

/// Cap on the epsilon binary search when targeting a point count.
const MAX_SEARCH_ITERATIONS: usize = 50;

/// Douglas-Peucker line simplification with a fixed `epsilon`.
///
/// Keeps both endpoints and, recursively, every point whose perpendicular
/// distance from the chord of its segment exceeds `epsilon`. Inputs with
/// fewer than 3 points are returned unchanged.
pub fn simplify_douglas_peucker(data: &[DataPoint], epsilon: f64) -> Vec<DataPoint> {
    let n = data.len();
    if n < 3 {
        return data.to_vec();
    }

    let xs: Vec<f64> = data.iter().map(|p| p.x_value()).collect();
    let mut kept = vec![false; n];
    kept[0] = true;
    kept[n - 1] = true;
    rdp_recurse(&xs, data, 0, n - 1, epsilon, &mut kept);

    data.iter()
        .zip(&kept)
        .filter(|&(_, k)| *k)
        .map(|(p, _)| p.clone())
        .collect()
}

fn rdp_recurse(
    xs: &[f64],
    data: &[DataPoint],
    start: usize,
    end: usize,
    epsilon: f64,
    kept: &mut [bool],
) {
    if end <= start + 1 {
        return;
    }

    let mut max_dist = 0.0;
    let mut max_idx = start;
    for i in start + 1..end {
        let d = perpendicular_distance(
            xs[i],
            data[i].y,
            xs[start],
            data[start].y,
            xs[end],
            data[end].y,
        );
        if d > max_dist {
            max_dist = d;
            max_idx = i;
        }
    }

    if max_dist > epsilon {
        kept[max_idx] = true;
        rdp_recurse(xs, data, start, max_idx, epsilon, kept);
        rdp_recurse(xs, data, max_idx, end, epsilon, kept);
    }
}

/// Douglas-Peucker driven to a target point count.
///
/// Binary-searches `epsilon` over half the bounding-box diagonal, capped at
/// 50 iterations, and accepts a simplification within 1 point of (and never
/// above) `target_points`. On non-convergence the best under-target
/// simplification seen so far is returned; the endpoints alone are the
/// final fallback.
pub fn sample_douglas_peucker(data: &[DataPoint], target_points: usize) -> Vec<DataPoint> {
    let n = data.len();
    if n <= target_points {
        return data.to_vec();
    }
    if n < 2 || target_points < 2 {
        // Cannot simplify below the two endpoints.
        return vec![data[0].clone(), data[n - 1].clone()];
    }

    let mut lo = 0.0f64;
    let mut hi = (bounding_diagonal(data) / 2.0).max(f64::MIN_POSITIVE);
    let mut best: Option<Vec<DataPoint>> = None;

    for _ in 0..MAX_SEARCH_ITERATIONS {
        let eps = 0.5 * (lo + hi);
        let simplified = simplify_douglas_peucker(data, eps);
        let len = simplified.len();

        if len > target_points {
            // Too fine, search coarser.
            lo = eps;
            continue;
        }
        if target_points - len <= 1 {
            return simplified;
        }
        if best.as_ref().map_or(true, |b| len > b.len()) {
            best = Some(simplified);
        }
        hi = eps;
    }

    best.unwrap_or_else(|| vec![data[0].clone(), data[n - 1].clone()])
}
