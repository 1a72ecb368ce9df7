//! Rows loaded from the league sheets

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::stats::MonthKey;

/// Timestamp layout the dashboard reads for raw score points
pub const SCORE_DATE_FORMAT: &str = "%Y-%m-%d 00:00:00";

/// A single game from the score sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    /// Bowler display key
    pub disp: String,
    pub score: u32,
    #[serde(serialize_with = "serialize_game_date")]
    pub date: NaiveDate,
}

impl ScoreRecord {
    pub fn new(disp: impl Into<String>, score: u32, date: NaiveDate) -> Self {
        Self {
            disp: disp.into(),
            score,
            date,
        }
    }

    /// Month bucket this game belongs to
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

fn serialize_game_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(SCORE_DATE_FORMAT))
}

/// Display metadata for a bowler
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BowlerMeta {
    /// Bowler display key
    #[serde(rename = "display", alias = "disp")]
    pub disp: String,
    /// Full name
    #[serde(alias = "full_name", alias = "full")]
    pub name: String,
    /// Color code, e.g. `#ff0000`
    #[serde(default)]
    pub hexcode: Option<String>,
}

impl BowlerMeta {
    pub fn new(disp: impl Into<String>, name: impl Into<String>, hexcode: Option<&str>) -> Self {
        Self {
            disp: disp.into(),
            name: name.into(),
            hexcode: hexcode.map(str::to_string),
        }
    }

    /// Hex code, treating a blank cell as missing
    pub fn color(&self) -> Option<&str> {
        self.hexcode.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

/// Score sheet row before date parsing
#[derive(Debug, Deserialize)]
pub(super) struct RawScoreRow {
    pub disp: String,
    pub score: u32,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_record_serializes_date_as_timestamp() {
        let record = ScoreRecord::new("Ann", 110, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "disp": "Ann", "score": 110, "date": "2024-01-09 00:00:00" })
        );
    }

    #[test]
    fn test_blank_hexcode_is_missing() {
        assert_eq!(BowlerMeta::new("Ann", "Ann Lee", Some("  ")).color(), None);
        assert_eq!(BowlerMeta::new("Ann", "Ann Lee", None).color(), None);
        assert_eq!(
            BowlerMeta::new("Ann", "Ann Lee", Some("#ff0000")).color(),
            Some("#ff0000")
        );
    }
}
