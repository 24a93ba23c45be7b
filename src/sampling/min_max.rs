use crate::data_types::DataPoint;

use super::common::{find_extrema_indices, index_buckets};

/// Min/max bucket decimation.
///
/// The series is split into `target_points / 2` index buckets and each
/// bucket emits its minimum and maximum y point in chronological order,
/// preserving the visual envelope of the signal. Buckets whose values are
/// all NaN emit nothing.
pub fn sample_min_max(data: &[DataPoint], target_points: usize) -> Vec<DataPoint> {
    let n = data.len();
    if n <= target_points {
        return data.to_vec();
    }

    let bucket_count = (target_points / 2).max(1);
    let mut out = Vec::with_capacity(target_points);

    for range in index_buckets(n, bucket_count) {
        let chunk = &data[range];
        let (min_idx, max_idx) = find_extrema_indices(chunk, |p: &DataPoint| p.y);
        if chunk[min_idx].y.is_nan() {
            continue;
        }

        if min_idx == max_idx {
            out.push(chunk[min_idx].clone());
        } else if min_idx < max_idx {
            out.push(chunk[min_idx].clone());
            out.push(chunk[max_idx].clone());
        } else {
            out.push(chunk[max_idx].clone());
            out.push(chunk[min_idx].clone());
        }
    }

    out
}
