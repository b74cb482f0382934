//! Generic polyline operations shared by the pipeline stages.

/// Downsample a polyline to at most `target` points by fixed-stride index
/// resampling.
///
/// If the input already has `target` or fewer points it is returned
/// unchanged. Otherwise exactly `target` indices are selected, evenly
/// spaced (inclusive of the first and last index) and rounded to the
/// nearest integer, so the first and last points are always preserved.
/// Duplicate indices are allowed when `target` is small relative to the
/// index gaps.
///
/// This is a deliberate fixed-stride policy, not a curvature-aware
/// simplification such as Douglas-Peucker: its job is only to suppress
/// graph-snapping zigzag, and even sampling keeps the output independent
/// of local curve detail. Input order is always preserved.
pub fn resample<P: Copy>(points: &[P], target: usize) -> Vec<P> {
    if target == 0 {
        return Vec::new();
    }
    if points.len() <= target {
        return points.to_vec();
    }
    if target == 1 {
        return vec![points[0]];
    }

    let last = (points.len() - 1) as f64;
    let step = last / (target - 1) as f64;
    (0..target)
        .map(|i| {
            let idx = (i as f64 * step).round() as usize;
            points[idx.min(points.len() - 1)]
        })
        .collect()
}

/// Remove consecutive duplicate entries from a sequence.
///
/// The stitcher feeds its input through this so that no two adjacent
/// waypoints are identical (zero-length hops would otherwise inflate the
/// route with backtracking).
pub fn dedup_consecutive<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if out.last() != Some(item) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resample_identity_when_small() {
        let points = vec![1, 2, 3];
        assert_eq!(resample(&points, 5), points);
        assert_eq!(resample(&points, 3), points);
    }

    #[test]
    fn test_resample_exact_count_and_endpoints() {
        let points: Vec<i32> = (0..100).collect();
        let out = resample(&points, 25);
        assert_eq!(out.len(), 25);
        assert_eq!(out[0], 0);
        assert_eq!(out[24], 99);
    }

    #[test]
    fn test_resample_preserves_order() {
        let points: Vec<i32> = (0..50).collect();
        let out = resample(&points, 10);
        for w in out.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn test_resample_degenerate_targets() {
        let points = vec![7, 8, 9, 10];
        assert!(resample(&points, 0).is_empty());
        assert_eq!(resample(&points, 1), vec![7]);
    }

    #[test]
    fn test_dedup_consecutive() {
        let items = vec![1, 1, 2, 2, 2, 3, 1, 1];
        assert_eq!(dedup_consecutive(&items), vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_dedup_empty() {
        let items: Vec<i32> = Vec::new();
        assert!(dedup_consecutive(&items).is_empty());
    }
}
