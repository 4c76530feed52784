//! Exact percentiles with linear interpolation between closest ranks.
//!
//! Matches the common "linear" definition: the `p`-th percentile of `n`
//! sorted values sits at fractional rank `p / 100 * (n - 1)`.

/// Percentile `p` (in percent, `0..=100`) of `values`.
///
/// Reorders `values` in place (selection, not a full sort). Returns 0.0 for
/// an empty slice.
pub fn percentile(values: &mut [f32], p: f64) -> f32 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let frac = rank - lower as f64;

    let (_, &mut below, above) = values.select_nth_unstable_by(lower, f32::total_cmp);
    if frac == 0.0 || above.is_empty() {
        return below;
    }

    // Next order statistic is the smallest value of the upper partition
    let next = above.iter().copied().fold(f32::INFINITY, f32::min);
    (below as f64 + (next - below) as f64 * frac) as f32
}
