//! Common types used across the application.

pub mod record;

pub use record::{DailySummary, ParseRecordTypeError, Record, RecordKey, RecordType};
