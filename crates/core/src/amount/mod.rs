//! Currency text parsing.
//!
//! Spreadsheet cells carry amounts as formatted text (`"$1,234.56"`), with
//! `"$ -"` standing in for zero. This module turns that text into exact
//! decimals.

pub mod error;
pub mod parser;

#[cfg(test)]
mod parser_props;

pub use error::AmountError;
pub use parser::{AmountParser, ZERO_SENTINEL};
