//! Legacy CSV snapshots.
//!
//! Before records lived in a database, each fetch wrote a CSV snapshot to
//! object storage. Daily snapshots are named `summaries_YYYY_MM_DD.csv`;
//! older days were consolidated into yearly `summaries_YYYY.csv` files that
//! carry a `Date` column. This module reads both and imports them into a
//! [`RecordStore`](crate::store::RecordStore).

pub mod error;
pub mod importer;
pub mod name;
pub mod reader;

pub use error::LegacyError;
pub use importer::{FileStats, ImportSummary, LegacyImporter};
pub use name::SnapshotName;
pub use reader::{SnapshotRows, parse_snapshot};
