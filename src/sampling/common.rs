use std::ops::Range;

/// Splits `0..n` into `count` equal-width index buckets. The split points
/// are rounded so the whole range is covered with no empty buckets; when
/// `count >= n` every element gets its own bucket.
pub fn index_buckets(n: usize, count: usize) -> Vec<Range<usize>> {
    if n == 0 || count == 0 {
        return Vec::new();
    }
    let count = count.min(n);
    let mut buckets = Vec::with_capacity(count);
    for i in 0..count {
        let start = i * n / count;
        let end = (i + 1) * n / count;
        if start < end {
            buckets.push(start..end);
        }
    }
    buckets
}

/// Scans a chunk for the indices of its minimum and maximum y values,
/// skipping NaN. Returns (min_idx, max_idx); for an all-NaN chunk both
/// indices point at a NaN entry and the caller is expected to check.
#[inline(always)]
pub fn find_extrema_indices<T, FY>(chunk: &[T], get_y: FY) -> (usize, usize)
where
    FY: Fn(&T) -> f64,
{
    let n = chunk.len();
    if n == 0 {
        return (0, 0);
    }

    let mut min_idx = 0;
    let mut max_idx = 0;
    let mut min_y = get_y(&chunk[0]);
    let mut max_y = min_y;

    let mut start = 1;
    if min_y.is_nan() {
        let mut found = false;
        for (i, item) in chunk.iter().enumerate().skip(1) {
            let val = get_y(item);
            if !val.is_nan() {
                min_y = val;
                max_y = val;
                min_idx = i;
                max_idx = i;
                start = i + 1;
                found = true;
                break;
            }
        }
        if !found {
            return (0, 0);
        }
    }

    for (i, item) in chunk.iter().enumerate().skip(start) {
        let val = get_y(item);
        if val.is_nan() {
            continue;
        }
        if val < min_y {
            min_y = val;
            min_idx = i;
        } else if val > max_y {
            max_y = val;
            max_idx = i;
        }
    }

    (min_idx, max_idx)
}
