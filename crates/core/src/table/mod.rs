//! Sectioned table extraction from a raw spreadsheet grid.
//!
//! Several tables sit side by side in one sheet, each in its own column
//! range. A section runs from the first row down to the first row that has
//! no cell inside its range at all.
//!
//! - `section` - slicing a column range into header and data rows
//! - `roles` - inferring which column holds which field from the header

pub mod roles;
pub mod section;

pub use roles::{ColumnRoles, ACCESSIBLE_HEADER, DESCRIPTION_HEADER, LIQUIDITY_HEADER};
pub use section::{ColumnRange, Grid, Section, SectionRow, extract_section};
