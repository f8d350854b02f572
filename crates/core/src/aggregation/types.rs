//! Aggregation data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset and liability totals for one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTotals {
    /// Sum of asset amounts.
    pub total_assets: Decimal,
    /// Sum of liability amounts.
    pub total_liabilities: Decimal,
    /// Sum of asset amounts flagged not accessible.
    pub total_inaccessible_assets: Decimal,
}

impl DateTotals {
    /// Assets minus liabilities.
    #[must_use]
    pub fn net_worth(&self) -> Decimal {
        self.total_assets - self.total_liabilities
    }

    /// Net worth excluding inaccessible assets.
    #[must_use]
    pub fn accessible_net_worth(&self) -> Decimal {
        self.net_worth() - self.total_inaccessible_assets
    }
}

/// One observation of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Amount on that date.
    pub amount: Decimal,
}

/// All observations of one item, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSeries {
    /// Item description.
    pub description: String,
    /// Date-ordered observations.
    pub points: Vec<SeriesPoint>,
}

/// Net-worth summary for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetWorthPoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Sum of asset amounts.
    pub assets: Decimal,
    /// Sum of liability amounts.
    pub liabilities: Decimal,
    /// Sum of inaccessible asset amounts.
    pub inaccessible_assets: Decimal,
    /// Assets minus liabilities.
    pub net_worth: Decimal,
    /// Net worth excluding inaccessible assets.
    pub accessible_net_worth: Decimal,
}

impl NetWorthPoint {
    /// Builds a point from the totals of one date.
    #[must_use]
    pub fn new(date: NaiveDate, totals: &DateTotals) -> Self {
        Self {
            date,
            assets: totals.total_assets,
            liabilities: totals.total_liabilities,
            inaccessible_assets: totals.total_inaccessible_assets,
            net_worth: totals.net_worth(),
            accessible_net_worth: totals.accessible_net_worth(),
        }
    }
}

/// Everything a report renderer needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportData {
    /// Per-date summary, ascending by date.
    pub summary: Vec<NetWorthPoint>,
    /// Asset series, sorted by description.
    pub assets: Vec<ItemSeries>,
    /// Liability series, sorted by description.
    pub liabilities: Vec<ItemSeries>,
}

impl ReportData {
    /// Returns true when there is nothing to report.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }
}
