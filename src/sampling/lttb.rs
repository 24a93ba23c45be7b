use crate::data_types::DataPoint;

/// Largest-Triangle-Three-Buckets downsampling.
///
/// The first and last points are always kept. The interior is divided into
/// `target_points - 2` equal-width (fractionally sized) buckets, and each
/// bucket contributes the point that forms the largest triangle with the
/// previously selected point and the centroid of the following bucket. This
/// favors peaks and valleys over flat stretches.
///
/// Inputs at or under `target_points` are returned unchanged, as are targets
/// below 3 where the bucket construction is undefined.
pub fn sample_lttb(data: &[DataPoint], target_points: usize) -> Vec<DataPoint> {
    let n = data.len();
    if n <= target_points || target_points < 3 {
        return data.to_vec();
    }

    // Coerce x once up front; text scalars would otherwise reparse per access.
    let xs: Vec<f64> = data.iter().map(|p| p.x_value()).collect();

    let bucket_width = (n - 2) as f64 / (target_points - 2) as f64;
    let mut sampled = Vec::with_capacity(target_points);
    sampled.push(data[0].clone());

    let mut a_idx = 0usize;

    for i in 0..target_points - 2 {
        let range_start = (i as f64 * bucket_width) as usize + 1;
        let range_end_raw = ((i + 1) as f64 * bucket_width) as usize + 1;
        let range_end = range_end_raw.min(n - 1);

        // Centroid of the next bucket; the final bucket looks at the end point.
        let avg_start = range_end_raw.min(n - 1);
        let avg_end = (((i + 2) as f64 * bucket_width) as usize + 1).min(n);
        let (c_x, c_y) = if avg_start < avg_end {
            let count = (avg_end - avg_start) as f64;
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for j in avg_start..avg_end {
                sum_x += xs[j];
                sum_y += data[j].y;
            }
            (sum_x / count, sum_y / count)
        } else {
            (xs[n - 1], data[n - 1].y)
        };

        let a_x = xs[a_idx];
        let a_y = data[a_idx].y;

        let mut max_area = -1.0;
        let mut next_a = range_start;
        for j in range_start..range_end {
            let area =
                (a_x * (data[j].y - c_y) + xs[j] * (c_y - a_y) + c_x * (a_y - data[j].y)).abs();
            if area > max_area {
                max_area = area;
                next_a = j;
            }
        }

        a_idx = next_a;
        sampled.push(data[a_idx].clone());
    }

    sampled.push(data[n - 1].clone());
    sampled
}
