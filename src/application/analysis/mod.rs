pub mod levels;
pub mod momentum;
pub mod normalizer;
pub mod patterns;
pub mod price_action;
pub mod statistics;
pub mod volume;

/// Percent change of `delta` relative to `base` as a two-decimal string.
/// A zero base yields "0.00%" instead of dividing by zero.
pub(crate) fn percent_string(delta: f64, base: f64) -> String {
    if base == 0.0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", delta / base * 100.0)
}

/// Rounds a price to two decimals for level bucketing.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
