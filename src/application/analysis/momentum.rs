//! Momentum analysis: interval-scaled rate of change, VWAP, and the recent
//! close-to-close price velocity.

use super::percent_string;
use crate::domain::market::bar::NormalizedBar;
use crate::domain::market::report::Momentum;
use tracing::warn;

/// Number of trailing bars covered by the price-velocity series.
const VELOCITY_WINDOW: usize = 5;

/// Caller guarantees `bars` is non-empty and sorted by time ascending.
/// `lookback` comes from the interval label (see `Interval::lookback_bars`).
pub(crate) fn analyze(bars: &[NormalizedBar], lookback: usize) -> Momentum {
    let last = &bars[bars.len() - 1];

    // With fewer bars than the lookback, fall back to whole-range endpoints.
    let reference = if bars.len() > lookback {
        &bars[bars.len() - 1 - lookback]
    } else {
        &bars[0]
    };
    let rate_of_change = percent_string(last.close - reference.close, reference.close);

    let total_volume: f64 = bars.iter().map(|b| b.volume).sum();
    let vwap = if total_volume == 0.0 {
        warn!("total volume is zero, VWAP degenerates to 0");
        0.0
    } else {
        bars.iter().map(|b| b.close * b.volume).sum::<f64>() / total_volume
    };

    let window = &bars[bars.len().saturating_sub(VELOCITY_WINDOW)..];
    let price_velocity = window
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            if i == 0 {
                // No predecessor inside the window.
                "0%".to_string()
            } else {
                percent_string(bar.close - window[i - 1].close, window[i - 1].close)
            }
        })
        .collect();

    Momentum {
        rate_of_change,
        vwap,
        price_velocity,
    }
}
