//! Level-of-detail classification from point density and zoom.

use crate::data_types::{LodConfig, LodLevel, Viewport};

/// Maps point count, zoom and viewport to a detail tier.
///
/// `effective_points = point_count / zoom_level` approximates how many
/// points are actually on screen; `pixels_per_point` is the viewport area
/// spread over them. First matching tier wins. Pure and stateless: callers
/// recompute on every zoom or resize and feed `max_points` back into the
/// sampling dispatcher.
pub fn determine_lod_level(point_count: usize, zoom_level: f64, viewport: &Viewport) -> LodConfig {
    let zoom = if zoom_level.is_finite() && zoom_level > 0.0 {
        zoom_level
    } else {
        1.0
    };
    let effective_points = point_count as f64 / zoom;
    let pixels_per_point = if effective_points > 0.0 {
        viewport.area() / effective_points
    } else {
        f64::INFINITY
    };

    if pixels_per_point < 10.0 || effective_points > 5000.0 {
        LodConfig {
            level: LodLevel::Low,
            max_points: 500,
            show_grid: false,
            show_labels: false,
            show_markers: false,
            marker_size: 0.0,
            line_width: 1.0,
        }
    } else if pixels_per_point < 50.0 || effective_points > 1000.0 {
        LodConfig {
            level: LodLevel::Medium,
            max_points: 1000,
            show_grid: true,
            show_labels: true,
            show_markers: false,
            marker_size: 0.0,
            line_width: 1.5,
        }
    } else {
        LodConfig {
            level: LodLevel::High,
            max_points: 5000,
            show_grid: true,
            show_labels: true,
            show_markers: true,
            marker_size: 3.0,
            line_width: 2.0,
        }
    }
}
