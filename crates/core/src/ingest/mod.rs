//! Spreadsheet ingestion.
//!
//! One run fetches the raw grid, drops the title rows, cuts out the assets
//! and liabilities sections, builds records, and upserts them.
//!
//! - `source` - where grids come from
//! - `layout` - which columns hold which section
//! - `pipeline` - the run itself

pub mod error;
pub mod layout;
pub mod pipeline;
pub mod source;

pub use error::{IngestError, SourceError};
pub use layout::SheetLayout;
pub use pipeline::{IngestReport, IngestionPipeline, parse_grid};
pub use source::{JsonFileSource, StaticSource, TableSource, parse_value_range};
