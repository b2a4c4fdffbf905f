//! Bar normalization: raw provider records into canonical numeric OHLCV bars.
//!
//! Providers disagree about field types (prices as quoted strings vs. JSON
//! numbers) and timestamp precision (epoch seconds vs. milliseconds). This
//! module coerces everything to a single trusted representation before any
//! analysis runs. The batch contract is fail-fast: one unparsable time or
//! price aborts the whole call, because partial chart data is worse than none.

use crate::domain::errors::ChartDataError;
use crate::domain::market::bar::{NormalizedBar, RawBar, RawField};
use chrono::{Local, TimeZone};
use tracing::debug;

/// Epoch values above this are treated as milliseconds. Second-precision
/// timestamps stay below ten digits until the year 2286.
const MILLIS_EPOCH_CUTOFF: f64 = 9_999_999_999.0;

/// Validates and coerces a batch of raw bars.
///
/// Input order is preserved (sorting is the statistics engine's concern) and
/// the input is never mutated. `volume` failures are non-fatal and default to
/// zero; `time`/`open`/`high`/`low`/`close` failures abort the batch with
/// [`ChartDataError::InvalidData`].
pub fn normalize(raw_bars: &[RawBar]) -> Result<Vec<NormalizedBar>, ChartDataError> {
    debug!(bars = raw_bars.len(), "normalizing raw bar batch");

    let mut normalized = Vec::with_capacity(raw_bars.len());
    for (index, bar) in raw_bars.iter().enumerate() {
        let time_raw = coerce(&bar.time).ok_or_else(|| invalid(index, "time", &bar.time))?;
        let open = coerce(&bar.open).ok_or_else(|| invalid(index, "open", &bar.open))?;
        let high = coerce(&bar.high).ok_or_else(|| invalid(index, "high", &bar.high))?;
        let low = coerce(&bar.low).ok_or_else(|| invalid(index, "low", &bar.low))?;
        let close = coerce(&bar.close).ok_or_else(|| invalid(index, "close", &bar.close))?;
        let volume = bar.volume.as_ref().and_then(coerce).unwrap_or(0.0);

        let time = to_epoch_seconds(time_raw);
        normalized.push(NormalizedBar {
            time,
            local_time: format_local_time(time),
            open,
            high,
            low,
            close,
            volume,
        });
    }

    Ok(normalized)
}

/// String-or-number coercion. Non-finite results count as failures so that
/// `"NaN"` or `"inf"` strings cannot smuggle sentinels into trusted bars.
fn coerce(field: &RawField) -> Option<f64> {
    match field {
        RawField::Number(n) if n.is_finite() => Some(*n),
        RawField::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn to_epoch_seconds(value: f64) -> i64 {
    if value > MILLIS_EPOCH_CUTOFF {
        (value / 1000.0) as i64
    } else {
        value as i64
    }
}

/// Display string for the bar's timestamp in the server's local timezone.
/// Out-of-range timestamps fall back to the raw second count.
pub(crate) fn format_local_time(epoch_seconds: i64) -> String {
    Local
        .timestamp_opt(epoch_seconds, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| epoch_seconds.to_string())
}

fn invalid(index: usize, field: &'static str, raw: &RawField) -> ChartDataError {
    let raw = match raw {
        RawField::Number(n) => n.to_string(),
        RawField::Text(s) => s.clone(),
        RawField::Other(v) => v.to_string(),
    };
    ChartDataError::InvalidData { index, field, raw }
}
