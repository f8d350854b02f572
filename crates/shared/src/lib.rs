//! Shared types, errors, and configuration for asset-manager.
//!
//! This crate provides common types used across all other crates:
//! - Record types for dated asset and liability snapshots
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
