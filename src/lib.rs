//! chart_sampling crate: data reduction and render-tier selection for large series

pub mod coerce;
pub mod data_types;
pub mod geometry;
pub mod lod;
pub mod render_mode;
pub mod sampling;

pub use data_types::{
    DataPoint, LodConfig, LodLevel, RenderMode, SamplingMethod, SamplingOptions, SamplingResult,
    Scalar, Viewport,
};
pub use lod::determine_lod_level;
pub use render_mode::{get_render_method, get_render_method_with_webgl};
pub use sampling::{sample_multiple_series, sample_series};
