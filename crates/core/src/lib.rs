//! Core business logic for asset-manager.
//!
//! This crate contains the ingestion, normalization, and aggregation logic
//! with ZERO database or web dependencies. Persistence is reached through the
//! [`store::RecordStore`] trait.
//!
//! # Modules
//!
//! - `amount` - Currency text to exact decimals
//! - `table` - Section extraction from a ragged grid
//! - `builder` - Canonical records from section rows
//! - `aggregation` - Per-date totals, net worth, and report data
//! - `store` - Record store trait and in-memory store
//! - `ingest` - Table sources and the ingestion pipeline
//! - `legacy` - Legacy CSV snapshot reading and import
//! - `storage` - Object storage for legacy snapshots

pub mod aggregation;
pub mod amount;
pub mod builder;
pub mod ingest;
pub mod legacy;
pub mod storage;
pub mod store;
pub mod table;
