//! Two-decimal rounding of summary figures

use super::model::{BowlerStats, MonthCell, SummaryRow};

/// Round to two decimal places.
///
/// Rounds the exact binary value in one step, so only true ties go to even:
/// 50.175 is stored just below the midpoint and becomes 50.17.
pub fn round2(value: f64) -> f64 {
    let formatted = format!("{:.2}", value);
    formatted.parse().unwrap_or(value)
}

impl SummaryRow {
    /// Copy of this row with every fractional figure rounded.
    ///
    /// `diff` was computed from the unrounded mean and is rounded on its own.
    pub fn rounded(&self) -> SummaryRow {
        let stats = &self.stats;
        SummaryRow {
            stats: BowlerStats {
                avg: round2(stats.avg),
                diff: round2(stats.diff),
                hundred_plus_pct: round2(stats.hundred_plus_pct),
                ..stats.clone()
            },
            months: self
                .months
                .iter()
                .map(|(month, cell)| {
                    let cell = match cell {
                        MonthCell::Average(avg) => MonthCell::Average(round2(*avg)),
                        MonthCell::NotAvailable => MonthCell::NotAvailable,
                    };
                    (*month, cell)
                })
                .collect(),
            name: self.name.clone(),
            hexcode: self.hexcode.clone(),
        }
    }
}
