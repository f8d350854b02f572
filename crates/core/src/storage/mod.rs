//! Object storage for legacy snapshot files using Apache OpenDAL.
//!
//! Snapshots live as flat objects at the root of a bucket or directory:
//! - S3-compatible: AWS S3, Cloudflare R2, MinIO
//! - Local filesystem (development, tests)

mod error;
mod service;

pub use error::StorageError;
pub use service::SnapshotStorage;
