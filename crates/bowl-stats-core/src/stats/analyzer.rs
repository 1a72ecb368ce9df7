//! Per-bowler and per-month aggregation of score records

use std::collections::{BTreeMap, BTreeSet};

use crate::loader::ScoreRecord;

use super::model::{BowlerStats, MonthKey};

/// Score at or above which a game counts as "100+"
pub const HUNDRED_PLUS_THRESHOLD: u32 = 100;

/// Mean score per month, per bowler
pub type MonthlyAverages = BTreeMap<String, BTreeMap<MonthKey, f64>>;

/// Running totals for one group of scores
#[derive(Debug, Default, Clone, Copy)]
struct ScoreTally {
    max: u32,
    sum: u64,
    count: usize,
    hundred_plus: usize,
}

impl ScoreTally {
    fn add(&mut self, score: u32) {
        self.max = self.max.max(score);
        self.sum += u64::from(score);
        self.count += 1;
        if score >= HUNDRED_PLUS_THRESHOLD {
            self.hundred_plus += 1;
        }
    }

    fn mean(&self) -> f64 {
        self.sum as f64 / self.count as f64
    }
}

/// Analyzer for generating bowler statistics from score records
pub struct StatsAnalyzer;

impl StatsAnalyzer {
    /// Compute aggregate statistics for every bowler, joined with their
    /// monthly averages. Bowlers are ordered by display key.
    pub fn analyze(records: &[ScoreRecord]) -> Vec<BowlerStats> {
        let mut monthly = Self::monthly_averages(records);

        Self::tally_by_bowler(records)
            .into_iter()
            .map(|(disp, tally)| {
                let avg = tally.mean();
                BowlerStats {
                    monthly: monthly.remove(&disp).unwrap_or_default(),
                    pr: tally.max,
                    avg,
                    total: tally.count,
                    hundred_plus: tally.hundred_plus,
                    hundred_plus_pct: tally.hundred_plus as f64 / tally.count as f64 * 100.0,
                    diff: f64::from(tally.max) - avg,
                    disp,
                }
            })
            .collect()
    }

    /// Mean score per (bowler, month); months without games are absent
    pub fn monthly_averages(records: &[ScoreRecord]) -> MonthlyAverages {
        let mut tallies: BTreeMap<(&str, MonthKey), ScoreTally> = BTreeMap::new();
        for record in records {
            tallies
                .entry((record.disp.as_str(), record.month()))
                .or_default()
                .add(record.score);
        }

        let mut averages = MonthlyAverages::new();
        for ((disp, month), tally) in tallies {
            averages
                .entry(disp.to_string())
                .or_default()
                .insert(month, tally.mean());
        }
        averages
    }

    /// Every month with at least one game, chronologically
    pub fn months(records: &[ScoreRecord]) -> BTreeSet<MonthKey> {
        records.iter().map(ScoreRecord::month).collect()
    }

    fn tally_by_bowler(records: &[ScoreRecord]) -> BTreeMap<String, ScoreTally> {
        let mut tallies: BTreeMap<String, ScoreTally> = BTreeMap::new();
        for record in records {
            match tallies.get_mut(&record.disp) {
                Some(tally) => tally.add(record.score),
                None => {
                    let mut tally = ScoreTally::default();
                    tally.add(record.score);
                    tallies.insert(record.disp.clone(), tally);
                }
            }
        }
        tallies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn game(disp: &str, score: u32, y: i32, m: u32, d: u32) -> ScoreRecord {
        ScoreRecord::new(disp, score, NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn sample_records() -> Vec<ScoreRecord> {
        vec![
            game("Ann", 90, 2024, 1, 3),
            game("Bo", 75, 2024, 2, 7),
            game("Ann", 110, 2024, 1, 10),
            game("Ann", 100, 2024, 1, 17),
        ]
    }

    #[test]
    fn test_analyze_aggregates() {
        let stats = StatsAnalyzer::analyze(&sample_records());
        assert_eq!(stats.len(), 2);

        let ann = &stats[0];
        assert_eq!(ann.disp, "Ann");
        assert_eq!(ann.pr, 110);
        assert_eq!(ann.avg, 100.0);
        assert_eq!(ann.total, 3);
        assert_eq!(ann.hundred_plus, 2);
        assert_eq!(ann.diff, 10.0);
        assert!((ann.hundred_plus_pct - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(ann.monthly.len(), 1);
        assert_eq!(ann.monthly[&MonthKey::new(2024, 1).unwrap()], 100.0);
    }

    #[test]
    fn test_single_game_bowler() {
        let stats = StatsAnalyzer::analyze(&sample_records());
        let bo = &stats[1];

        assert_eq!(bo.pr, 75);
        assert_eq!(bo.avg, 75.0);
        assert_eq!(bo.diff, 0.0);
        assert_eq!(bo.hundred_plus_pct, 0.0);
    }

    #[test]
    fn test_diff_uses_unrounded_mean() {
        // mean 100.333.., so diff is 0.666.. rather than 101 - 100.33
        let records = vec![
            game("Cy", 101, 2024, 3, 1),
            game("Cy", 100, 2024, 3, 8),
            game("Cy", 100, 2024, 3, 15),
        ];
        let stats = StatsAnalyzer::analyze(&records);
        assert!((stats[0].diff - (101.0 - 301.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_monthly_averages_are_sparse() {
        let records = vec![
            game("Ann", 90, 2024, 1, 3),
            game("Ann", 120, 2024, 3, 3),
            game("Ann", 100, 2024, 3, 10),
            game("Bo", 75, 2024, 2, 7),
        ];
        let monthly = StatsAnalyzer::monthly_averages(&records);

        let ann = &monthly["Ann"];
        assert_eq!(ann.len(), 2);
        assert_eq!(ann[&MonthKey::new(2024, 1).unwrap()], 90.0);
        assert_eq!(ann[&MonthKey::new(2024, 3).unwrap()], 110.0);
        assert!(!ann.contains_key(&MonthKey::new(2024, 2).unwrap()));

        let months: Vec<String> = StatsAnalyzer::months(&records)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(months, ["2024-01", "2024-02", "2024-03"]);
    }

    #[test]
    fn test_display_keys_are_case_sensitive() {
        let records = vec![game("ann", 80, 2024, 1, 3), game("Ann", 90, 2024, 1, 3)];
        let stats = StatsAnalyzer::analyze(&records);

        assert_eq!(stats.len(), 2);
        assert!(stats.iter().all(|s| s.total == 1));
    }

    #[test]
    fn test_empty_input() {
        assert!(StatsAnalyzer::analyze(&[]).is_empty());
        assert!(StatsAnalyzer::months(&[]).is_empty());
    }
}
