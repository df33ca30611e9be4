/// Upper bound for every score and confidence the engine reports.
pub const MAX_SCORE: f64 = 100.0;

/// Percentage of `part` over `whole`, clamped to `[0, 100]` and rounded to one decimal.
/// A zero `whole` yields 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_to_tenth((part as f64 / whole as f64 * 100.0).clamp(0.0, MAX_SCORE))
}

/// Ties go to the even tenth: 6.25 → 6.2, 6.35 → 6.4.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
