//! Sheet layout.

use asset_manager_shared::config::SheetConfig;

use crate::table::ColumnRange;

/// Where the sections sit in the fetched grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// Title rows dropped before extraction.
    pub header_rows: usize,
    /// Assets section columns.
    pub assets: ColumnRange,
    /// Liabilities section columns.
    pub liabilities: ColumnRange,
}

impl Default for SheetLayout {
    /// One title row, assets in `A:D`, liabilities in `E:G`.
    fn default() -> Self {
        Self {
            header_rows: 1,
            assets: ColumnRange::new(0, 4),
            liabilities: ColumnRange::new(4, 7),
        }
    }
}

impl From<&SheetConfig> for SheetLayout {
    fn from(config: &SheetConfig) -> Self {
        Self {
            header_rows: config.header_rows,
            assets: config.assets.into(),
            liabilities: config.liabilities.into(),
        }
    }
}
