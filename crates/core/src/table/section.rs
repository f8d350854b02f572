//! Column-range slicing of a ragged grid.

use serde::{Deserialize, Serialize};

use asset_manager_shared::config::ColumnSpan;

/// Raw grid of text cells. Rows may have any length.
pub type Grid = Vec<Vec<String>>;

/// Half-open column range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRange {
    /// First column, inclusive.
    pub start: usize,
    /// Last column, exclusive.
    pub end: usize,
}

impl ColumnRange {
    /// Creates a range. An `end` before `start` yields an empty range.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        let end = if end < start { start } else { end };
        Self { start, end }
    }

    /// Number of columns in the range.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.end - self.start
    }

    /// Returns the cells of `row` inside this range, padded with empty
    /// strings to the full width.
    #[must_use]
    pub fn slice_padded(&self, row: &[String]) -> Vec<String> {
        let mut cells: Vec<String> = row
            .get(self.start..self.end.min(row.len()))
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        cells.resize(self.width(), String::new());
        cells
    }
}

impl From<ColumnSpan> for ColumnRange {
    fn from(span: ColumnSpan) -> Self {
        Self::new(span.start, span.end)
    }
}

/// One logical table cut out of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Header cells; empty when the section has no rows.
    pub header: Vec<String>,
    /// Data rows, each padded to the header width.
    pub rows: Vec<Vec<String>>,
}

impl Section {
    /// Returns true when the section has no header row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}

/// Bounds-checked view over one data row.
#[derive(Debug, Clone, Copy)]
pub struct SectionRow<'a> {
    cells: &'a [String],
}

impl<'a> SectionRow<'a> {
    /// Wraps a slice of cells.
    #[must_use]
    pub const fn new(cells: &'a [String]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `index`, or `None` past the end of the row.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&'a str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Returns the trimmed cell at `index` when it is not blank.
    #[must_use]
    pub fn non_blank(&self, index: usize) -> Option<&'a str> {
        self.cell(index).map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Extracts the section occupying `range` from `grid`.
///
/// The section ends at the first row whose length is `<= range.start`; rows
/// of other sections further down do not extend it. The first row is the
/// header and the rest are data. An empty section is not an error.
#[must_use]
pub fn extract_section(grid: &[Vec<String>], range: ColumnRange) -> Section {
    let mut rows = grid
        .iter()
        .take_while(|row| row.len() > range.start)
        .map(|row| range.slice_padded(row));

    let Some(header) = rows.next() else {
        return Section::default();
    };

    Section {
        header,
        rows: rows.collect(),
    }
}
