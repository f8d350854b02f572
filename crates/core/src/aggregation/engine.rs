//! Aggregation engine.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use asset_manager_shared::types::{DailySummary, Record, RecordType};

use super::error::AggregationError;
use super::types::{DateTotals, ItemSeries, NetWorthPoint, ReportData, SeriesPoint};

type SeriesMap = BTreeMap<String, Vec<SeriesPoint>>;

/// Totals and series computed from an in-memory set of records.
///
/// All outputs are deterministic: date-keyed data ascends by date and
/// item-keyed data is sorted by description.
#[derive(Debug, Clone, Default)]
pub struct AggregationEngine {
    sums: BTreeMap<(NaiveDate, RecordType), Decimal>,
    inaccessible: BTreeMap<NaiveDate, Decimal>,
    assets: SeriesMap,
    liabilities: SeriesMap,
}

impl AggregationEngine {
    /// Aggregates `records`. Input order does not matter.
    ///
    /// # Errors
    ///
    /// Returns `AggregationError::Overflow` when a date's total exceeds the
    /// decimal range.
    pub fn from_records(records: &[Record]) -> Result<Self, AggregationError> {
        let mut engine = Self::default();

        for record in records {
            accumulate(
                engine.sums.entry((record.date, record.record_type)).or_default(),
                record,
            )?;

            if record.is_inaccessible_asset() {
                accumulate(engine.inaccessible.entry(record.date).or_default(), record)?;
            }

            let series = match record.record_type {
                RecordType::Asset => &mut engine.assets,
                RecordType::Liability => &mut engine.liabilities,
            };
            series
                .entry(record.description.clone())
                .or_default()
                .push(SeriesPoint {
                    date: record.date,
                    amount: record.amount,
                });
        }

        for points in engine.assets.values_mut().chain(engine.liabilities.values_mut()) {
            points.sort_by_key(|p| p.date);
        }

        Ok(engine)
    }

    /// Dates that have at least one record, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let mut last = None;
        self.sums.keys().filter_map(move |(date, _)| {
            if last == Some(*date) {
                None
            } else {
                last = Some(*date);
                Some(*date)
            }
        })
    }

    /// Totals for `date`. All zero when the date has no records.
    #[must_use]
    pub fn totals(&self, date: NaiveDate) -> DateTotals {
        let sum = |record_type| {
            self.sums
                .get(&(date, record_type))
                .copied()
                .unwrap_or_default()
        };

        DateTotals {
            total_assets: sum(RecordType::Asset),
            total_liabilities: sum(RecordType::Liability),
            total_inaccessible_assets: self.inaccessible.get(&date).copied().unwrap_or_default(),
        }
    }

    /// Assets minus liabilities on `date`.
    #[must_use]
    pub fn net_worth(&self, date: NaiveDate) -> Decimal {
        self.totals(date).net_worth()
    }

    /// Net worth on `date` excluding inaccessible assets.
    #[must_use]
    pub fn accessible_net_worth(&self, date: NaiveDate) -> Decimal {
        self.totals(date).accessible_net_worth()
    }

    /// One summary per (date, type) that has records, ordered by (date, type).
    #[must_use]
    pub fn daily_summaries(&self) -> Vec<DailySummary> {
        self.sums
            .iter()
            .map(|(&(date, record_type), &total_amount)| DailySummary {
                date,
                record_type,
                total_amount,
            })
            .collect()
    }

    /// One asset summary per date that has inaccessible assets.
    #[must_use]
    pub fn inaccessible_summaries(&self) -> Vec<DailySummary> {
        self.inaccessible
            .iter()
            .map(|(&date, &total_amount)| DailySummary {
                date,
                record_type: RecordType::Asset,
                total_amount,
            })
            .collect()
    }

    /// Per-item asset series keyed by description.
    #[must_use]
    pub fn asset_series(&self) -> &BTreeMap<String, Vec<SeriesPoint>> {
        &self.assets
    }

    /// Per-item liability series keyed by description.
    #[must_use]
    pub fn liability_series(&self) -> &BTreeMap<String, Vec<SeriesPoint>> {
        &self.liabilities
    }

    /// Builds the serializable report model.
    #[must_use]
    pub fn report(&self) -> ReportData {
        let to_items = |series: &SeriesMap| {
            series
                .iter()
                .map(|(description, points)| ItemSeries {
                    description: description.clone(),
                    points: points.clone(),
                })
                .collect()
        };

        ReportData {
            summary: self
                .dates()
                .map(|date| NetWorthPoint::new(date, &self.totals(date)))
                .collect(),
            assets: to_items(&self.assets),
            liabilities: to_items(&self.liabilities),
        }
    }
}

fn accumulate(total: &mut Decimal, record: &Record) -> Result<(), AggregationError> {
    *total = total
        .checked_add(record.amount)
        .ok_or(AggregationError::Overflow { date: record.date })?;
    Ok(())
}
