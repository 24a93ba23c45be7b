//! Advisory backend selection from point density.
//!
//! Mode selection never changes the sampled data, only which drawing
//! backend the (out-of-scope) renderer should use.

use crate::data_types::{RenderMode, Viewport};

/// Point count above which a capable GPU should take over.
const WEBGL_POINT_THRESHOLD: usize = 10_000;

/// Density-based svg/canvas split: raster above 0.1 points per pixel.
pub fn get_render_method(point_count: usize, viewport: &Viewport) -> RenderMode {
    if point_density(point_count, viewport) > 0.1 {
        RenderMode::Canvas
    } else {
        RenderMode::Svg
    }
}

/// Like [`get_render_method`] with a GPU tier on top.
///
/// When the GPU is available and the series is large the answer is webgl;
/// otherwise the canvas threshold drops to density 0.01, or anything past
/// 100 points.
pub fn get_render_method_with_webgl(
    point_count: usize,
    viewport: &Viewport,
    gpu_available: bool,
) -> RenderMode {
    if gpu_available && point_count > WEBGL_POINT_THRESHOLD {
        return RenderMode::Webgl;
    }
    if point_density(point_count, viewport) > 0.01 || point_count > 100 {
        RenderMode::Canvas
    } else {
        RenderMode::Svg
    }
}

fn point_density(point_count: usize, viewport: &Viewport) -> f64 {
    let area = viewport.area();
    if area > 0.0 {
        point_count as f64 / area
    } else {
        f64::INFINITY
    }
}
