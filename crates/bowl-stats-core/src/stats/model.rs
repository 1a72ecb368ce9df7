//! Data models for bowler statistics

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

/// Sentinel written for a month in which a bowler has no games
pub const NOT_AVAILABLE: &str = "N/A";

/// Calendar month bucket, formatted `YYYY-MM`
///
/// Ordering is chronological, which matches the lexical order of the
/// formatted key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One month column of a summary row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonthCell {
    /// Mean score over the bowler's games that month
    Average(f64),
    /// No games that month
    NotAvailable,
}

impl Serialize for MonthCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MonthCell::Average(avg) => serializer.serialize_f64(*avg),
            MonthCell::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// Aggregate statistics for one bowler
#[derive(Debug, Clone, PartialEq)]
pub struct BowlerStats {
    /// Bowler display key
    pub disp: String,
    /// Personal record (highest score)
    pub pr: u32,
    /// Mean score
    pub avg: f64,
    /// Games played
    pub total: usize,
    /// Games scoring 100 or more
    pub hundred_plus: usize,
    /// Share of 100+ games, in percent
    pub hundred_plus_pct: f64,
    /// Personal record minus mean
    pub diff: f64,
    /// Mean score per month, only for months with games.
    /// Moved into [`SummaryRow::months`] when rows are merged.
    pub monthly: BTreeMap<MonthKey, f64>,
}

/// A bowler's row in the exported summary table
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub stats: BowlerStats,
    /// One cell per month seen anywhere in the score sheet
    pub months: BTreeMap<MonthKey, MonthCell>,
    /// Full name, absent when the bowler has no metadata row
    pub name: Option<String>,
    pub hexcode: String,
}

impl SummaryRow {
    pub fn disp(&self) -> &str {
        &self.stats.disp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_format_and_order() {
        let jan = MonthKey::from_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        let dec = MonthKey::new(2023, 12).unwrap();

        assert_eq!(jan.to_string(), "2024-01");
        assert_eq!(dec.to_string(), "2023-12");
        assert!(dec < jan);
        assert_eq!(MonthKey::new(2024, 13), None);
    }

    #[test]
    fn test_month_cell_serialization() {
        assert_eq!(serde_json::to_string(&MonthCell::Average(100.5)).unwrap(), "100.5");
        assert_eq!(serde_json::to_string(&MonthCell::NotAvailable).unwrap(), "\"N/A\"");
    }
}
