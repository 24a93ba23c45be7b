//! Geometric primitives and degeneracy guards shared by the samplers.

use crate::data_types::DataPoint;

/// Up to this many evenly spaced points are probed by the degeneracy checks.
const PROBE_LIMIT: usize = 100;

/// Twice the signed area of the triangle (a, b, c).
pub fn signed_area(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> f64 {
    (bx - ax) * (cy - ay) - (cx - ax) * (by - ay)
}

/// Perpendicular distance from p to the chord (a, b).
///
/// A zero-length chord falls back to the plain Euclidean distance to `a`
/// instead of dividing by zero.
pub fn perpendicular_distance(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }
    (dy * px - dx * py + bx * ay - by * ax).abs() / len
}

/// Diagonal of the coerced bounding box, the scale reference for epsilon
/// searches and deviation normalization.
pub fn bounding_diagonal(data: &[DataPoint]) -> f64 {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in data {
        let x = p.x_value();
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    ((max_x - min_x).powi(2) + (max_y - min_y).powi(2)).sqrt()
}

fn probe_points(data: &[DataPoint]) -> Vec<(f64, f64)> {
    let step = (data.len() / PROBE_LIMIT).max(1);
    data.iter()
        .step_by(step)
        .map(|p| (p.x_value(), p.y))
        .collect()
}

/// True when the probed points all lie on one line (within `tolerance`).
///
/// Inputs with fewer than 3 points are trivially collinear. The check first
/// finds three pairwise distinct probes and tests their triangle area; only
/// when that area is near zero does it re-scan every probe against the line
/// through the first two distinct points.
pub fn is_collinear(data: &[DataPoint], tolerance: f64) -> bool {
    if data.len() < 3 {
        return true;
    }
    let probes = probe_points(data);

    let mut distinct: Vec<(f64, f64)> = Vec::with_capacity(3);
    for &p in &probes {
        let is_new = distinct
            .iter()
            .all(|q| (p.0 - q.0).abs() > tolerance || (p.1 - q.1).abs() > tolerance);
        if is_new {
            distinct.push(p);
            if distinct.len() == 3 {
                break;
            }
        }
    }
    if distinct.len() < 3 {
        // Fewer than three distinct probes: degenerate, treat as a line.
        return true;
    }

    let (a, b, c) = (distinct[0], distinct[1], distinct[2]);
    if signed_area(a.0, a.1, b.0, b.1, c.0, c.1).abs() > tolerance {
        return false;
    }

    // Confirm against the full probe set with the cross-product test.
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    probes
        .iter()
        .all(|p| ((p.0 - a.0) * dy - (p.1 - a.1) * dx).abs() <= tolerance)
}

/// True when coerced x equals y (within `tolerance`) for every probed point.
pub fn is_xy_identical(data: &[DataPoint], tolerance: f64) -> bool {
    if data.is_empty() {
        return true;
    }
    probe_points(data)
        .iter()
        .all(|p| (p.0 - p.1).abs() <= tolerance)
}
