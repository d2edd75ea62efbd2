use std::cmp::Ordering;

/// Returns the `p`-quantile of an ascending slice of finite values.
///
/// Uses linear interpolation between order statistics (R-7, the default of
/// most statistical packages): with `n` values the quantile sits at index
/// `p * (n - 1)`, and a fractional index blends its two neighbours.  `p` is
/// clamped to `[0, 1]`.
///
/// Returns `None` for an empty slice or a non-finite `p`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !p.is_finite() {
        return None;
    }
    let last = sorted.len() - 1;
    if p <= 0.0 || last == 0 {
        return Some(sorted[0]);
    }
    if p >= 1.0 {
        return Some(sorted[last]);
    }
    let index = p * last as f64;
    let floor = index.floor();
    let lower = floor as usize;
    let fraction = index - floor;
    if fraction == 0.0 || lower >= last {
        return Some(sorted[lower.min(last)]);
    }
    let (a, b) = (sorted[lower], sorted[lower + 1]);
    let span = b - a;
    let value = if span.is_finite() {
        a + span * fraction
    } else {
        // span overflows when a and b are near opposite ends of f64
        a * (1.0 - fraction) + b * fraction
    };
    Some(value.clamp(a, b))
}

/// Sorts values in ascending order, keeping equal values in input order.
pub(crate) fn sort_values(values: &mut [f64]) {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}
