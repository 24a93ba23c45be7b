pub mod adaptive;
pub mod common;
pub mod dispatch;
pub mod douglas_peucker;
pub mod lttb;
pub mod min_max;
pub mod nth_point;
pub mod quality;

pub use adaptive::{
    analyze_data_characteristics, optimal_sampling_method, sample_adaptive, DataCharacteristics,
};
pub use dispatch::{sample_multiple_series, sample_series};
pub use douglas_peucker::{sample_douglas_peucker, simplify_douglas_peucker};
pub use lttb::sample_lttb;
pub use min_max::sample_min_max;
pub use nth_point::{sample_nth_point, sample_stratified};
pub use quality::{evaluate_sampling_methods, QualityReport};
