//! Moving-average convergence check.

/// True when every pair of values, truncated toward zero, differs by at most
/// `tolerance`.
///
/// Fails on an empty set or any undefined value. Truncation happens before
/// comparing, so 9.99 and 8.01 count as 9 and 8: the effective tolerance is
/// up to one unit wider than `tolerance`. Existing rule thresholds were tuned
/// against this behavior, so it is kept as is.
pub fn moving_averages_converge(values: &[Option<f64>], tolerance: i64) -> bool {
    if values.is_empty() {
        return false;
    }

    let mut lowest = i128::MAX;
    let mut highest = i128::MIN;
    for value in values {
        let truncated = match value {
            Some(v) if v.is_finite() => v.trunc() as i64 as i128,
            _ => return false,
        };
        lowest = lowest.min(truncated);
        highest = highest.max(truncated);
    }

    // max - min bounds every pairwise difference
    highest - lowest <= tolerance as i128
}
