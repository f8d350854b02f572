//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Spreadsheet source and layout.
    #[serde(default)]
    pub sheet: SheetConfig,
    /// Object storage holding legacy CSV snapshots.
    #[serde(default)]
    pub legacy: Option<StorageProvider>,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Half-open column span `[start, end)` of one section in the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ColumnSpan {
    /// First column (zero-based, inclusive).
    pub start: usize,
    /// Last column (zero-based, exclusive).
    pub end: usize,
}

/// Spreadsheet configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    /// Spreadsheet identifier.
    #[serde(default)]
    pub spreadsheet_id: String,
    /// A1-notation range to read.
    #[serde(default = "default_range")]
    pub range: String,
    /// OAuth bearer token for the values API.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Title rows above the section headers ("Assets", "Liabilities").
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,
    /// Columns holding the assets table.
    #[serde(default = "default_assets_span")]
    pub assets: ColumnSpan,
    /// Columns holding the liabilities table.
    #[serde(default = "default_liabilities_span")]
    pub liabilities: ColumnSpan,
}

fn default_range() -> String {
    "Sheet1!A:G".to_string()
}

fn default_header_rows() -> usize {
    1
}

fn default_assets_span() -> ColumnSpan {
    ColumnSpan { start: 0, end: 4 }
}

fn default_liabilities_span() -> ColumnSpan {
    ColumnSpan { start: 4, end: 7 }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            range: default_range(),
            access_token: None,
            header_rows: default_header_rows(),
            assets: default_assets_span(),
            liabilities: default_liabilities_span(),
        }
    }
}

/// Object storage provider for legacy snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// S3-compatible storage: AWS S3, Cloudflare R2, MinIO.
    S3 {
        /// Bucket name.
        bucket: String,
        /// Region.
        #[serde(default = "default_region")]
        region: String,
        /// Endpoint URL; empty selects the AWS default.
        #[serde(default)]
        endpoint: String,
        /// Access key ID; empty falls back to the environment.
        #[serde(default)]
        access_key_id: String,
        /// Secret access key; empty falls back to the environment.
        #[serde(default)]
        secret_access_key: String,
    },
    /// Local filesystem directory.
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl StorageProvider {
    /// Create local filesystem provider.
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the provider name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::LocalFs { .. } => "local",
        }
    }

    /// Get the bucket name or local root.
    #[must_use]
    pub fn bucket(&self) -> &str {
        match self {
            Self::S3 { bucket, .. } => bucket,
            Self::LocalFs { root } => root.to_str().unwrap_or("local"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ASSET_MANAGER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
