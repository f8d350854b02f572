//! Snapshot object names.

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static DAILY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^summaries_(\d{4})_(\d{2})_(\d{2})\.csv$").expect("valid regex")
});

static YEARLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^summaries_(\d{4})\.csv$").expect("valid regex"));

/// A recognised snapshot object name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SnapshotName {
    /// One day's snapshot; the date in the name applies to every row.
    Daily(NaiveDate),
    /// A consolidated year; rows carry their own dates.
    Yearly(i32),
}

impl SnapshotName {
    /// Classifies an object name. Returns `None` for anything else,
    /// including daily names that do not spell a real date.
    #[must_use]
    pub fn classify(name: &str) -> Option<Self> {
        if let Some(caps) = DAILY_RE.captures(name) {
            let year = caps[1].parse().ok()?;
            let month = caps[2].parse().ok()?;
            let day = caps[3].parse().ok()?;
            return NaiveDate::from_ymd_opt(year, month, day).map(Self::Daily);
        }

        YEARLY_RE
            .captures(name)
            .and_then(|caps| caps[1].parse().ok())
            .map(Self::Yearly)
    }

    /// Date that overrides any `Date` column.
    #[must_use]
    pub const fn date_override(self) -> Option<NaiveDate> {
        match self {
            Self::Daily(date) => Some(date),
            Self::Yearly(_) => None,
        }
    }

    /// Returns true for yearly snapshots.
    #[must_use]
    pub const fn is_yearly(self) -> bool {
        matches!(self, Self::Yearly(_))
    }
}

impl fmt::Display for SnapshotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily(date) => write!(f, "summaries_{}.csv", date.format("%Y_%m_%d")),
            Self::Yearly(year) => write!(f, "summaries_{year}.csv"),
        }
    }
}
