//! Volume analysis: summary statistics, trend vs. the range average, and the
//! volume-by-price-level profile shared with the support/resistance clusters.

use super::price_action::extreme_indices;
use crate::domain::market::bar::NormalizedBar;
use crate::domain::market::report::{VolumeDistribution, VolumeStats, VolumeTrend};
use std::collections::BTreeMap;

/// Accumulated volume per price level, keyed by the bar midpoint in
/// hundredths (cents). Integer keys keep bucketing exact and ordering
/// deterministic; callers format or scale as needed.
pub(crate) fn volume_by_level(bars: &[NormalizedBar]) -> BTreeMap<i64, f64> {
    let mut levels: BTreeMap<i64, f64> = BTreeMap::new();
    for bar in bars {
        let mid = bar.mid_price();
        if !mid.is_finite() {
            continue;
        }
        let cents = (mid * 100.0).round() as i64;
        *levels.entry(cents).or_insert(0.0) += bar.volume;
    }
    levels
}

pub(crate) fn level_key(cents: i64) -> String {
    format!("{:.2}", cents as f64 / 100.0)
}

/// Caller guarantees `bars` is non-empty and sorted by time ascending.
pub(crate) fn analyze(bars: &[NormalizedBar]) -> VolumeStats {
    let total: f64 = bars.iter().map(|b| b.volume).sum();
    let average = total / bars.len() as f64;
    let max = bars.iter().map(|b| b.volume).fold(f64::NEG_INFINITY, f64::max);
    let min = bars.iter().map(|b| b.volume).fold(f64::INFINITY, f64::min);

    let last = &bars[bars.len() - 1];
    let trend = if last.volume > average {
        VolumeTrend::Increasing
    } else {
        VolumeTrend::Decreasing
    };

    let by_price_level = volume_by_level(bars)
        .into_iter()
        .map(|(cents, vol)| (level_key(cents), vol))
        .collect();

    let (high_idx, low_idx) = extreme_indices(bars);

    VolumeStats {
        average,
        max,
        min,
        trend,
        distribution: VolumeDistribution {
            by_price_level,
            at_high: bars[high_idx].volume,
            at_low: bars[low_idx].volume,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(time: i64, high: f64, low: f64, volume: f64) -> NormalizedBar {
        NormalizedBar {
            time,
            local_time: String::new(),
            open: (high + low) / 2.0,
            high,
            low,
            close: (high + low) / 2.0,
            volume,
        }
    }

    #[test]
    fn test_average_and_extremes() {
        let bars = vec![bar(1, 10.0, 9.0, 100.0), bar(2, 10.0, 9.0, 300.0)];
        let vs = analyze(&bars);
        assert_eq!(vs.average, 200.0);
        assert_eq!(vs.max, 300.0);
        assert_eq!(vs.min, 100.0);
    }

    #[test]
    fn test_trend_compares_last_bar_to_average() {
        let rising = vec![bar(1, 10.0, 9.0, 100.0), bar(2, 10.0, 9.0, 300.0)];
        assert_eq!(analyze(&rising).trend, VolumeTrend::Increasing);

        // Last bar exactly at the average is not increasing.
        let flat = vec![bar(1, 10.0, 9.0, 200.0), bar(2, 10.0, 9.0, 200.0)];
        assert_eq!(analyze(&flat).trend, VolumeTrend::Decreasing);
    }

    #[test]
    fn test_histogram_buckets_by_rounded_midpoint() {
        // Midpoints 9.5 and 9.5 accumulate; 11.0 stands alone.
        let bars = vec![
            bar(1, 10.0, 9.0, 100.0),
            bar(2, 10.0, 9.0, 50.0),
            bar(3, 12.0, 10.0, 75.0),
        ];
        let vs = analyze(&bars);
        assert_eq!(vs.distribution.by_price_level.get("9.50"), Some(&150.0));
        assert_eq!(vs.distribution.by_price_level.get("11.00"), Some(&75.0));
    }

    #[test]
    fn test_distribution_reports_volume_at_extremes() {
        let bars = vec![
            bar(1, 15.0, 9.0, 100.0),
            bar(2, 12.0, 5.0, 40.0),
            bar(3, 11.0, 10.0, 7.0),
        ];
        let vs = analyze(&bars);
        assert_eq!(vs.distribution.at_high, 100.0);
        assert_eq!(vs.distribution.at_low, 40.0);
    }
}
