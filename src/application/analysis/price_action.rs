//! Price-action analysis: range extremes, previous swings, and the
//! direction of the move across the analyzed window.

use super::percent_string;
use crate::domain::market::bar::NormalizedBar;
use crate::domain::market::report::{CurrentPrice, ExtremePoint, PriceAction, PriceChange, Trend};

/// Indices of the bars setting the maximum high and the minimum low.
/// Ties resolve to the earliest bar in sorted order.
pub(crate) fn extreme_indices(bars: &[NormalizedBar]) -> (usize, usize) {
    let mut high_idx = 0;
    let mut low_idx = 0;
    for (i, bar) in bars.iter().enumerate() {
        if bar.high > bars[high_idx].high {
            high_idx = i;
        }
        if bar.low < bars[low_idx].low {
            low_idx = i;
        }
    }
    (high_idx, low_idx)
}

/// Caller guarantees `bars` is non-empty and sorted by time ascending.
pub(crate) fn analyze(bars: &[NormalizedBar]) -> PriceAction {
    let (high_idx, low_idx) = extreme_indices(bars);
    let high_bar = &bars[high_idx];
    let low_bar = &bars[low_idx];

    // Previous swing: best value among all bars excluding the identified
    // extreme bar. A single-bar sequence clamps to the infinity sentinel.
    let previous_high = bars
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != high_idx)
        .map(|(_, b)| b.high)
        .fold(f64::NEG_INFINITY, f64::max);
    let previous_low = bars
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != low_idx)
        .map(|(_, b)| b.low)
        .fold(f64::INFINITY, f64::min);

    let first = &bars[0];
    let last = &bars[bars.len() - 1];
    let absolute = last.close - first.open;

    PriceAction {
        high: ExtremePoint {
            value: high_bar.high,
            time: high_bar.time,
            volume: high_bar.volume,
            previous_swing: previous_high,
        },
        low: ExtremePoint {
            value: low_bar.low,
            time: low_bar.time,
            volume: low_bar.volume,
            previous_swing: previous_low,
        },
        current: CurrentPrice {
            price: last.close,
            volume: last.volume,
            // Equality counts as downward.
            trend: if last.close > first.open {
                Trend::Upward
            } else {
                Trend::Downward
            },
        },
        change: PriceChange {
            absolute,
            percentage: percent_string(absolute, first.open),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> NormalizedBar {
        NormalizedBar {
            time,
            local_time: String::new(),
            open,
            high,
            low,
            close,
            volume,
        }
    }

    #[test]
    fn test_extremes_track_owning_bar() {
        let bars = vec![
            bar(1, 10.0, 11.0, 9.0, 10.5, 100.0),
            bar(2, 10.5, 13.0, 10.0, 12.0, 250.0),
            bar(3, 12.0, 12.5, 8.5, 9.0, 300.0),
        ];
        let pa = analyze(&bars);
        assert_eq!(pa.high.value, 13.0);
        assert_eq!(pa.high.time, 2);
        assert_eq!(pa.high.volume, 250.0);
        assert_eq!(pa.low.value, 8.5);
        assert_eq!(pa.low.time, 3);
        assert_eq!(pa.low.volume, 300.0);
    }

    #[test]
    fn test_previous_swing_excludes_extreme_bar_only() {
        let bars = vec![
            bar(1, 10.0, 11.0, 9.0, 10.5, 0.0),
            bar(2, 10.5, 13.0, 10.0, 12.0, 0.0),
            bar(3, 12.0, 12.5, 8.5, 9.0, 0.0),
        ];
        let pa = analyze(&bars);
        assert_eq!(pa.high.previous_swing, 12.5);
        assert_eq!(pa.low.previous_swing, 9.0);
    }

    #[test]
    fn test_repeated_extreme_reports_repeated_value() {
        // Two bars share the maximum high; excluding the first still leaves 13.0.
        let bars = vec![
            bar(1, 10.0, 13.0, 9.0, 10.5, 0.0),
            bar(2, 10.5, 13.0, 10.0, 12.0, 0.0),
        ];
        let pa = analyze(&bars);
        assert_eq!(pa.high.time, 1);
        assert_eq!(pa.high.previous_swing, 13.0);
    }

    #[test]
    fn test_single_bar_clamps_previous_swing_to_sentinels() {
        let bars = vec![bar(1, 10.0, 11.0, 9.0, 10.5, 0.0)];
        let pa = analyze(&bars);
        assert_eq!(pa.high.previous_swing, f64::NEG_INFINITY);
        assert_eq!(pa.low.previous_swing, f64::INFINITY);
    }

    #[test]
    fn test_flat_close_counts_as_downward() {
        let bars = vec![bar(1, 100.0, 101.0, 99.0, 100.0, 0.0)];
        let pa = analyze(&bars);
        assert_eq!(pa.current.trend, Trend::Downward);
        assert_eq!(pa.change.absolute, 0.0);
        assert_eq!(pa.change.percentage, "0.00%");
    }

    #[test]
    fn test_zero_first_open_guards_percentage() {
        let bars = vec![bar(1, 0.0, 1.0, 0.0, 1.0, 0.0)];
        let pa = analyze(&bars);
        assert_eq!(pa.change.percentage, "0.00%");
    }
}
