//! Report types produced by the statistics engine.
//!
//! The whole tree is serde-serializable with camelCase keys because the
//! chart-analysis request handler embeds it as JSON inside an LLM prompt;
//! enum wire strings match what the dashboard prompt expects verbatim.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of price over the analyzed range (last close vs. first open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Upward,
    Downward,
}

/// Whether the latest bar's volume sits above or below the range average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeTrend {
    Increasing,
    Decreasing,
}

/// Single-bar candlestick classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandlestickPattern {
    Invalid,
    Doji,
    StrongBullish,
    StrongBearish,
    Hammer,
    ShootingStar,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotKind {
    Resistance,
    Support,
}

/// An extreme (highest high or lowest low) with the owning bar's context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtremePoint {
    pub value: f64,
    /// Epoch seconds of the bar that set the extreme.
    pub time: i64,
    pub volume: f64,
    /// Best value among all other bars; `-inf` / `+inf` when no other bar exists.
    pub previous_swing: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPrice {
    pub price: f64,
    pub volume: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChange {
    pub absolute: f64,
    /// Two-decimal percent string, e.g. `"8.08%"`.
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAction {
    pub high: ExtremePoint,
    pub low: ExtremePoint,
    pub current: CurrentPrice,
    pub change: PriceChange,
}

/// Volume observed at the bars that set the price extremes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDistribution {
    /// Accumulated volume per price level, keyed by the bar midpoint
    /// rounded to two decimals. BTreeMap keeps serialization deterministic.
    pub by_price_level: BTreeMap<String, f64>,
    pub at_high: f64,
    pub at_low: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeStats {
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub trend: VolumeTrend,
    pub distribution: VolumeDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Momentum {
    /// Percent change across the interval's lookback window.
    pub rate_of_change: String,
    /// Volume-weighted average price; `0.0` when total volume is zero.
    pub vwap: f64,
    /// Close-to-close percent change for each of the last (up to) five bars;
    /// the first entry is the literal `"0%"` (no predecessor in the window).
    pub price_velocity: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedCandle {
    pub time: i64,
    pub pattern: CandlestickPattern,
}

/// Pairwise comparisons between the last two bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendFlags {
    pub higher_highs: bool,
    pub higher_lows: bool,
    pub lower_highs: bool,
    pub lower_lows: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patterns {
    /// Classification of the last three bars, oldest first.
    pub candlesticks: Vec<ClassifiedCandle>,
    pub trend: TrendFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotPoint {
    pub kind: PivotKind,
    pub price: f64,
    pub time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeCluster {
    pub price_level: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportResistance {
    pub pivot_points: Vec<PivotPoint>,
    /// Top five price levels by accumulated volume, descending.
    pub volume_clusters: Vec<VolumeCluster>,
    /// Every bar high/low rounded to two decimals plus the nearest-integer
    /// roundings, deduplicated, ascending.
    pub key_levels: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start: String,
    pub end: String,
    /// Stated as a bar count ("N data points"), not wall-clock time.
    pub duration: String,
}

/// The complete statistics report: a pure function of the sorted bar
/// sequence and the interval label. No hidden state; identical inputs
/// always produce identical reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub price_action: PriceAction,
    pub volume: VolumeStats,
    pub momentum: Momentum,
    pub patterns: Patterns,
    pub support_resistance: SupportResistance,
    pub time_range: TimeRange,
}
