//! Canonical record construction from extracted sections.
//!
//! Bad rows never abort a section: they are skipped and reported.

pub mod service;
pub mod types;


pub use service::RecordBuilder;
pub use types::{BuildOutcome, SkippedRow};
