//! Statistics for bowling league score sheets
//!
//! Aggregates raw games per bowler and per month, joins the result with
//! display metadata and exports it as the dashboard's JSON feed.

mod analyzer;
mod export;
mod merge;
mod model;
mod report;
mod round;

pub use analyzer::{MonthlyAverages, StatsAnalyzer, HUNDRED_PLUS_THRESHOLD};
pub use export::{check_month_columns, export_json, to_json, FIXED_FIELDS, HUNDRED_PLUS_PCT_FIELD};
pub use merge::merge_rows;
pub use model::*;
pub use report::StatsReport;
pub use round::round2;
