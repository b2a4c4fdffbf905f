//! Support/resistance analysis: pivot points, volume clusters, and the
//! candidate key levels derived from bar highs and lows.

use super::round2;
use super::volume::volume_by_level;
use crate::domain::market::bar::NormalizedBar;
use crate::domain::market::report::{PivotKind, PivotPoint, SupportResistance, VolumeCluster};
use std::collections::BTreeSet;

/// How many trailing bars the pivot scan examines.
const PIVOT_WINDOW: usize = 20;
/// How many volume clusters the report keeps.
const CLUSTER_COUNT: usize = 5;

/// Caller guarantees `bars` is sorted by time ascending.
pub(crate) fn analyze(bars: &[NormalizedBar]) -> SupportResistance {
    SupportResistance {
        pivot_points: pivot_points(bars),
        volume_clusters: volume_clusters(bars),
        key_levels: key_levels(bars),
    }
}

/// Local extremes over the last [`PIVOT_WINDOW`] bars. Interior bars only:
/// the window's first and last bar have no second neighbor to compare with,
/// and windows below three bars yield nothing. A bar matching both
/// conditions reports as resistance.
fn pivot_points(bars: &[NormalizedBar]) -> Vec<PivotPoint> {
    let window = &bars[bars.len().saturating_sub(PIVOT_WINDOW)..];
    if window.len() < 3 {
        return Vec::new();
    }

    let mut pivots = Vec::new();
    for i in 1..window.len() - 1 {
        let bar = &window[i];
        if bar.high > window[i - 1].high && bar.high > window[i + 1].high {
            pivots.push(PivotPoint {
                kind: PivotKind::Resistance,
                price: bar.high,
                time: bar.time,
            });
        } else if bar.low < window[i - 1].low && bar.low < window[i + 1].low {
            pivots.push(PivotPoint {
                kind: PivotKind::Support,
                price: bar.low,
                time: bar.time,
            });
        }
    }
    pivots
}

/// Top price levels by accumulated volume, descending. Ties break on price
/// ascending so the ordering is deterministic.
fn volume_clusters(bars: &[NormalizedBar]) -> Vec<VolumeCluster> {
    let mut clusters: Vec<(i64, f64)> = volume_by_level(bars).into_iter().collect();
    clusters.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    clusters
        .into_iter()
        .take(CLUSTER_COUNT)
        .map(|(cents, volume)| VolumeCluster {
            price_level: cents as f64 / 100.0,
            volume,
        })
        .collect()
}

/// Sorted, deduplicated union of every bar's high/low at two-decimal
/// precision together with the nearest-integer roundings.
fn key_levels(bars: &[NormalizedBar]) -> Vec<f64> {
    let mut cents: BTreeSet<i64> = BTreeSet::new();
    for bar in bars {
        for price in [bar.high, bar.low] {
            if !price.is_finite() {
                continue;
            }
            cents.insert((round2(price) * 100.0).round() as i64);
            cents.insert(price.round() as i64 * 100);
        }
    }
    cents.into_iter().map(|c| c as f64 / 100.0).collect()
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
    fn test_pivot_detection_interior_bars() {
        let bars = vec![
            bar(1, 10.0, 9.0, 0.0),
            bar(2, 12.0, 9.5, 0.0),  // resistance: high above both neighbors
            bar(3, 11.0, 8.0, 0.0),  // support: low below both neighbors
            bar(4, 11.5, 8.5, 0.0),
        ];
        let pivots = pivot_points(&bars);
        assert_eq!(pivots.len(), 2);
        assert_eq!(pivots[0].kind, PivotKind::Resistance);
        assert_eq!(pivots[0].price, 12.0);
        assert_eq!(pivots[0].time, 2);
        assert_eq!(pivots[1].kind, PivotKind::Support);
        assert_eq!(pivots[1].price, 8.0);
        assert_eq!(pivots[1].time, 3);
    }

    #[test]
    fn test_pivot_window_below_three_bars_is_empty() {
        let bars = vec![bar(1, 10.0, 9.0, 0.0), bar(2, 12.0, 8.0, 0.0)];
        assert!(pivot_points(&bars).is_empty());
    }

    #[test]
    fn test_pivot_scan_limited_to_last_twenty_bars() {
        // A spike at the start of a 25-bar series falls outside the window.
        let mut bars: Vec<NormalizedBar> = Vec::new();
        bars.push(bar(0, 50.0, 9.0, 0.0));
        for i in 1..25 {
            bars.push(bar(i, 10.0 + (i % 2) as f64, 9.0 - (i % 2) as f64, 0.0));
        }
        let pivots = pivot_points(&bars);
        assert!(pivots.iter().all(|p| p.time >= 5));
        assert!(pivots.iter().all(|p| p.price < 50.0));
    }

    #[test]
    fn test_clusters_top_five_descending() {
        let bars: Vec<NormalizedBar> = (0..7)
            .map(|i| bar(i, 10.0 + i as f64, 10.0 + i as f64, 10.0 * (i + 1) as f64))
            .collect();
        let clusters = volume_clusters(&bars);
        assert_eq!(clusters.len(), 5);
        assert_eq!(clusters[0].volume, 70.0);
        assert_eq!(clusters[0].price_level, 16.0);
        assert!(clusters.windows(2).all(|w| w[0].volume >= w[1].volume));
    }

    #[test]
    fn test_key_levels_include_integer_roundings() {
        let bars = vec![bar(1, 10.57, 9.94, 0.0)];
        // 10.57 -> {10.57, 11}; 9.94 -> {9.94, 10}
        assert_eq!(key_levels(&bars), vec![9.94, 10.0, 10.57, 11.0]);
    }

    #[test]
    fn test_key_levels_deduplicate() {
        let bars = vec![bar(1, 10.0, 9.0, 0.0), bar(2, 10.0, 9.0, 0.0)];
        assert_eq!(key_levels(&bars), vec![9.0, 10.0]);
    }
}
