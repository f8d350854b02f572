//! Record builder.

use chrono::NaiveDate;
use tracing::warn;

use asset_manager_shared::types::{Record, RecordType};

use super::types::{BuildOutcome, SkippedRow};
use crate::amount::{AmountParser, ZERO_SENTINEL};
use crate::table::{ColumnRoles, Section, SectionRow};

/// Accessible-cell value that marks an asset as not readily liquid.
const NOT_ACCESSIBLE: &str = "N";

/// Builds records of one type and date from section rows.
#[derive(Debug, Clone, Copy)]
pub struct RecordBuilder {
    record_type: RecordType,
    date: NaiveDate,
}

impl RecordBuilder {
    /// Creates a builder for one section of one ingestion run.
    #[must_use]
    pub const fn new(record_type: RecordType, date: NaiveDate) -> Self {
        Self { record_type, date }
    }

    /// Builds records from an extracted section.
    #[must_use]
    pub fn build_section(&self, section: &Section) -> BuildOutcome {
        self.build(&section.header, &section.rows)
    }

    /// Builds records from a header row and data rows.
    ///
    /// Rows with a blank description are dropped silently. Rows whose amount
    /// cannot be parsed are dropped and reported in
    /// [`BuildOutcome::skipped`].
    #[must_use]
    pub fn build(&self, header: &[String], rows: &[Vec<String>]) -> BuildOutcome {
        let roles = ColumnRoles::infer(header);
        let mut outcome = BuildOutcome::default();

        for cells in rows {
            let row = SectionRow::new(cells);
            let Some(description) = row.non_blank(roles.description) else {
                continue;
            };

            let raw_amount = row.cell(roles.amount).unwrap_or(ZERO_SENTINEL);
            match AmountParser::parse(raw_amount) {
                Ok(amount) => outcome.records.push(Record::new(
                    self.date,
                    self.record_type,
                    description,
                    amount,
                    self.accessible(&row, roles),
                )),
                Err(err) => {
                    warn!(
                        record_type = %self.record_type,
                        description,
                        raw_amount,
                        "Skipping row with unparsable amount"
                    );
                    outcome.skipped.push(SkippedRow {
                        record_type: self.record_type,
                        description: description.to_string(),
                        raw_amount: raw_amount.to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        outcome
    }

    fn accessible(&self, row: &SectionRow<'_>, roles: ColumnRoles) -> bool {
        if self.record_type == RecordType::Liability {
            return true;
        }

        roles
            .accessible
            .and_then(|index| row.cell(index))
            .is_none_or(|flag| flag.trim().to_uppercase() != NOT_ACCESSIBLE)
    }
}
