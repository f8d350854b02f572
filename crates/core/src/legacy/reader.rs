//! Snapshot CSV reader.

use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::warn;

use asset_manager_shared::types::{Record, RecordType};

use super::error::LegacyError;
use crate::amount::AmountParser;

const DESCRIPTION: &str = "Description";
const AMOUNT: &str = "Amount";
const TYPE: &str = "Type";
const DATE: &str = "Date";
const ACCESSIBLE: &str = "Accessible";

/// Records read from one snapshot, plus the number of rows left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotRows {
    /// Records in file order.
    pub records: Vec<Record>,
    /// Rows skipped with a warning.
    pub skipped: usize,
}

struct Columns {
    description: usize,
    amount: usize,
    record_type: usize,
    date: Option<usize>,
    accessible: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord, needs_date: bool) -> Result<Self, LegacyError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &'static str| find(name).ok_or(LegacyError::MissingColumn(name));

        let date = find(DATE);
        if needs_date && date.is_none() {
            return Err(LegacyError::MissingColumn(DATE));
        }

        Ok(Self {
            description: require(DESCRIPTION)?,
            amount: require(AMOUNT)?,
            record_type: require(TYPE)?,
            date,
            accessible: find(ACCESSIBLE),
        })
    }
}

/// Parses a snapshot CSV.
///
/// When `date_override` is set (daily snapshots) it is used for every row
/// and any `Date` column is ignored. Otherwise each row's `Date` cell is read
/// from its leading `YYYY-MM-DD`.
///
/// Rows with a blank description are dropped silently. Rows with an unknown
/// type, a missing date, or an unreadable or negative amount are dropped with
/// a warning. An empty amount is zero.
///
/// # Errors
///
/// Returns an error if the CSV is malformed or a required column is missing.
pub fn parse_snapshot(
    text: &str,
    date_override: Option<NaiveDate>,
) -> Result<SnapshotRows, LegacyError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let columns = Columns::locate(reader.headers()?, date_override.is_none())?;
    let mut rows = SnapshotRows::default();

    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let line = index + 2;
        let cell = |i: usize| row.get(i).unwrap_or("");

        let description = cell(columns.description);
        if description.is_empty() {
            continue;
        }

        let Some(date) = date_override.or_else(|| columns.date.and_then(|i| parse_date(cell(i))))
        else {
            warn!(line, description, "Skipping snapshot row without a date");
            rows.skipped += 1;
            continue;
        };

        let record_type = match RecordType::from_str(cell(columns.record_type)) {
            Ok(record_type) => record_type,
            Err(err) => {
                warn!(line, description, error = %err, "Skipping snapshot row");
                rows.skipped += 1;
                continue;
            }
        };

        let Some(amount) = parse_amount(cell(columns.amount)) else {
            warn!(
                line,
                description,
                amount = cell(columns.amount),
                "Skipping snapshot row with unreadable amount"
            );
            rows.skipped += 1;
            continue;
        };

        let accessible = columns
            .accessible
            .is_none_or(|i| !is_false_flag(cell(i)));

        rows.records
            .push(Record::new(date, record_type, description, amount, accessible));
    }

    Ok(rows)
}

fn parse_date(cell: &str) -> Option<NaiveDate> {
    let day = cell.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn parse_amount(cell: &str) -> Option<Decimal> {
    if cell.is_empty() {
        return Some(Decimal::ZERO);
    }
    let amount = Decimal::from_str_exact(cell)
        .ok()
        .or_else(|| AmountParser::parse(cell).ok())?;
    (amount >= Decimal::ZERO).then_some(amount)
}

fn is_false_flag(cell: &str) -> bool {
    cell.eq_ignore_ascii_case("N") || cell.eq_ignore_ascii_case("FALSE")
}
