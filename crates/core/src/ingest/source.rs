//! Table sources.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use super::error::SourceError;
use crate::table::Grid;

/// Something that yields a raw grid of text cells in one call.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Fetches the whole grid. Rows may be ragged.
    async fn fetch_grid(&self) -> Result<Grid, SourceError>;
}

/// Decodes a grid from JSON.
///
/// Accepts a spreadsheet `ValueRange` object (the grid is under `values`,
/// which may be missing for an empty range) or a bare array of arrays.
/// Non-string cells are converted to text; `null` becomes an empty cell.
///
/// # Errors
///
/// Returns `SourceError::Decode` if the payload has any other shape.
pub fn parse_value_range(json: &str) -> Result<Grid, SourceError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| SourceError::Decode(e.to_string()))?;

    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(mut object) => match object.remove("values") {
            None | Some(Value::Null) => return Ok(Grid::new()),
            Some(Value::Array(rows)) => rows,
            Some(other) => {
                return Err(SourceError::Decode(format!(
                    "'values' must be an array, got {other}"
                )));
            }
        },
        other => {
            return Err(SourceError::Decode(format!(
                "expected an object or array, got {other}"
            )));
        }
    };

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| match row {
            Value::Array(cells) => Ok(cells.into_iter().map(cell_text).collect()),
            other => Err(SourceError::Decode(format!(
                "row {index} must be an array, got {other}"
            ))),
        })
        .collect()
}

fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Reads a grid from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TableSource for JsonFileSource {
    async fn fetch_grid(&self) -> Result<Grid, SourceError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Io(format!("{}: {e}", self.path.display())))?;
        parse_value_range(&json)
    }
}

/// A fixed grid, for tests and replays.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    grid: Grid,
}

impl StaticSource {
    /// Creates a source that always yields `grid`.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }
}

#[async_trait]
impl TableSource for StaticSource {
    async fn fetch_grid(&self) -> Result<Grid, SourceError> {
        Ok(self.grid.clone())
    }
}
