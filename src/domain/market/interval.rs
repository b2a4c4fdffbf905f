use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart interval selected in the dashboard (the range buttons above the
/// chart widget). Controls how far back the momentum rate-of-change looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    OneDay,
    OneWeek,
    OneMonth,
    OneYear,
}

/// Lookback applied when the interval label is unknown.
pub const DEFAULT_LOOKBACK_BARS: usize = 5;

impl Interval {
    /// Parses a dashboard interval label. Unknown labels yield `None`;
    /// callers fall back to [`DEFAULT_LOOKBACK_BARS`].
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "1D" => Some(Interval::OneDay),
            "1W" => Some(Interval::OneWeek),
            "1M" => Some(Interval::OneMonth),
            "1Y" => Some(Interval::OneYear),
            _ => None,
        }
    }

    /// Number of bars the rate-of-change window spans for this interval.
    pub fn lookback_bars(&self) -> usize {
        match self {
            Interval::OneDay => 5,
            Interval::OneWeek => 4,
            Interval::OneMonth => 3,
            Interval::OneYear => 12,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Interval::OneDay => "1D",
            Interval::OneWeek => "1W",
            Interval::OneMonth => "1M",
            Interval::OneYear => "1Y",
        }
    }

    /// Lookback for a raw label string, applying the default for unknown labels.
    pub fn lookback_for_label(label: &str) -> usize {
        Self::from_label(label)
            .map(|i| i.lookback_bars())
            .unwrap_or(DEFAULT_LOOKBACK_BARS)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}
