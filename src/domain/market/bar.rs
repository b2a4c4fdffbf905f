use serde::{Deserialize, Serialize};

/// A single untrusted field of a raw bar. Market-data providers are
/// inconsistent about whether prices and timestamps arrive as JSON numbers
/// or as quoted strings, so both are accepted; anything else is rejected
/// during normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// One untrusted OHLCV record as received from a market-data source.
///
/// No invariants are guaranteed: `time` may be epoch seconds or epoch
/// milliseconds, prices may be strings, `volume` may be missing entirely.
/// Unknown passthrough fields are accepted by serde and dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBar {
    pub time: RawField,
    pub open: RawField,
    pub high: RawField,
    pub low: RawField,
    pub close: RawField,
    #[serde(default)]
    pub volume: Option<RawField>,
}

impl RawBar {
    /// Convenience constructor for callers that already hold numeric data.
    pub fn from_numbers(time: f64, open: f64, high: f64, low: f64, close: f64, volume: Option<f64>) -> Self {
        Self {
            time: RawField::Number(time),
            open: RawField::Number(open),
            high: RawField::Number(high),
            low: RawField::Number(low),
            close: RawField::Number(close),
            volume: volume.map(RawField::Number),
        }
    }
}

/// A validated OHLCV bar with canonical numeric fields.
///
/// `time` is epoch seconds; `local_time` is a display string derived from it.
/// OHLC ordering (`high >= max(open, close)` etc.) is deliberately NOT
/// enforced here: garbage relationships pass through and the statistics
/// engine must tolerate them without panicking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBar {
    pub time: i64,
    pub local_time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl NormalizedBar {
    /// Midpoint of the bar's range, used as its volume-profile price level.
    pub fn mid_price(&self) -> f64 {
        (self.high + self.low) / 2.0
    }
}
