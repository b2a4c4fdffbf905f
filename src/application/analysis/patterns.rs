//! Candlestick classification and short-horizon trend flags.

use crate::domain::market::bar::NormalizedBar;
use crate::domain::market::report::{CandlestickPattern, ClassifiedCandle, Patterns, TrendFlags};

/// How many trailing bars receive a candlestick classification.
const CANDLE_WINDOW: usize = 3;

/// Body-to-range ratio below which a candle is a doji.
const DOJI_RATIO: f64 = 0.1;
/// Body-to-range ratio above which a directional candle is "strong".
const STRONG_RATIO: f64 = 0.6;
/// Shadow-to-body multiple for hammer / shooting star wicks.
const WICK_MULTIPLE: f64 = 2.0;

/// Classifies a single bar. Normalized bars always carry finite fields, but
/// classification stays defensive: non-finite values report `Invalid` and a
/// zero range never reaches the ratio division.
pub(crate) fn classify(bar: &NormalizedBar) -> CandlestickPattern {
    if !bar.open.is_finite() || !bar.close.is_finite() || !bar.high.is_finite() || !bar.low.is_finite() {
        return CandlestickPattern::Invalid;
    }

    let body = (bar.close - bar.open).abs();
    let range = bar.high - bar.low;
    if range == 0.0 {
        // A flat bar with a real body is garbage data, not a doji.
        return if body == 0.0 {
            CandlestickPattern::Doji
        } else {
            CandlestickPattern::Normal
        };
    }

    let ratio = body / range;
    if ratio < DOJI_RATIO {
        return CandlestickPattern::Doji;
    }

    let bullish = bar.close > bar.open;
    let bearish = bar.close < bar.open;
    if bullish && ratio > STRONG_RATIO {
        return CandlestickPattern::StrongBullish;
    }
    if bearish && ratio > STRONG_RATIO {
        return CandlestickPattern::StrongBearish;
    }

    let lower_shadow = bar.open.min(bar.close) - bar.low;
    let upper_shadow = bar.high - bar.open.max(bar.close);
    if lower_shadow > WICK_MULTIPLE * body && bullish {
        return CandlestickPattern::Hammer;
    }
    if upper_shadow > WICK_MULTIPLE * body && bearish {
        return CandlestickPattern::ShootingStar;
    }

    CandlestickPattern::Normal
}

/// Caller guarantees `bars` is sorted by time ascending.
pub(crate) fn analyze(bars: &[NormalizedBar]) -> Patterns {
    let candlesticks = bars[bars.len().saturating_sub(CANDLE_WINDOW)..]
        .iter()
        .map(|bar| ClassifiedCandle {
            time: bar.time,
            pattern: classify(bar),
        })
        .collect();

    let trend = if bars.len() >= 2 {
        let prev = &bars[bars.len() - 2];
        let last = &bars[bars.len() - 1];
        TrendFlags {
            higher_highs: last.high > prev.high,
            higher_lows: last.low > prev.low,
            lower_highs: last.high < prev.high,
            lower_lows: last.low < prev.low,
        }
    } else {
        TrendFlags::default()
    };

    Patterns { candlesticks, trend }
}
