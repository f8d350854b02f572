//! Date and type aggregation over records.
//!
//! - `error` - overflow while summing
//! - `engine` - per-date totals, net worth, and per-item series
//! - `types` - totals and serializable report data

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::AggregationEngine;
pub use error::AggregationError;
pub use types::{DateTotals, ItemSeries, NetWorthPoint, ReportData, SeriesPoint};
