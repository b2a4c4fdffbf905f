pub mod application;
pub mod domain;

pub use application::analysis::normalizer::normalize;
pub use application::analysis::statistics::compute_statistics;
pub use domain::errors::ChartDataError;
pub use domain::market::bar::{NormalizedBar, RawBar, RawField};
pub use domain::market::interval::Interval;
pub use domain::market::report::StatisticsReport;
