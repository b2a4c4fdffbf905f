use thiserror::Error;

/// Errors produced by the chart statistics core.
#[derive(Debug, Error)]
pub enum ChartDataError {
    #[error("invalid bar data at index {index}: field '{field}' could not be parsed from {raw:?}")]
    InvalidData {
        index: usize,
        field: &'static str,
        raw: String,
    },

    #[error("cannot compute statistics over an empty bar sequence")]
    EmptyInput,
}
