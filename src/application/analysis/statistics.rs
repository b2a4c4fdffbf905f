//! Statistics engine entry point.
//!
//! Fans a sorted copy of the bar sequence out to the six sub-analyses and
//! assembles the report. Each sub-analysis is an independent pure
//! computation over the same sorted slice; none reads another's output.

use super::normalizer::format_local_time;
use super::{levels, momentum, patterns, price_action, volume};
use crate::domain::errors::ChartDataError;
use crate::domain::market::bar::NormalizedBar;
use crate::domain::market::interval::Interval;
use crate::domain::market::report::{StatisticsReport, TimeRange};
use tracing::debug;

/// Computes the full statistics report for a chart request.
///
/// The caller's slice is never mutated: analysis runs on a defensively
/// copied, time-ascending sort. Fails with [`ChartDataError::EmptyInput`]
/// on an empty sequence; degenerate numeric cases inside a non-empty
/// sequence are guarded, not fatal.
pub fn compute_statistics(
    bars: &[NormalizedBar],
    interval: &str,
) -> Result<StatisticsReport, ChartDataError> {
    if bars.is_empty() {
        return Err(ChartDataError::EmptyInput);
    }

    let mut sorted = bars.to_vec();
    sorted.sort_by_key(|bar| bar.time);

    let lookback = Interval::lookback_for_label(interval);
    debug!(bars = sorted.len(), interval, lookback, "computing chart statistics");

    Ok(StatisticsReport {
        price_action: price_action::analyze(&sorted),
        volume: volume::analyze(&sorted),
        momentum: momentum::analyze(&sorted, lookback),
        patterns: patterns::analyze(&sorted),
        support_resistance: levels::analyze(&sorted),
        time_range: time_range(&sorted),
    })
}

/// Chronological bounds of the analyzed window. Duration is a bar count,
/// not wall-clock time: intervals vary and gaps are common.
fn time_range(sorted: &[NormalizedBar]) -> TimeRange {
    TimeRange {
        start: format_local_time(sorted[0].time),
        end: format_local_time(sorted[sorted.len() - 1].time),
        duration: format!("{} data points", sorted.len()),
    }
}
