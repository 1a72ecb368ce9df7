//! The assembled statistics for one run

use tracing::info;

use crate::color::ColorSource;
use crate::loader::{BowlerMeta, ScoreRecord};

use super::analyzer::StatsAnalyzer;
use super::merge::merge_rows;
use super::model::{MonthKey, SummaryRow};

/// Summary table plus the raw scores it was computed from
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    /// One row per bowler, ordered by display key
    pub rows: Vec<SummaryRow>,
    /// Every month with at least one game, chronologically
    pub months: Vec<MonthKey>,
    /// Input scores, in file order
    pub scores: Vec<ScoreRecord>,
}

impl StatsReport {
    /// Aggregate scores and join them with display metadata
    pub fn from_records(
        scores: Vec<ScoreRecord>,
        metadata: &[BowlerMeta],
        colors: &mut dyn ColorSource,
    ) -> Self {
        let months = StatsAnalyzer::months(&scores);
        let stats = StatsAnalyzer::analyze(&scores);
        info!(
            "Aggregated {} scores into {} bowlers across {} months",
            scores.len(),
            stats.len(),
            months.len()
        );

        let rows = merge_rows(stats, &months, metadata, colors);

        Self {
            rows,
            months: months.into_iter().collect(),
            scores,
        }
    }

    /// Summary row for a display key
    pub fn bowler(&self, disp: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.disp() == disp)
    }
}
