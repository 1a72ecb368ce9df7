//! CSV loading for the score and metadata sheets
//!
//! Both loaders are all-or-nothing: the first bad row aborts the load with an
//! error naming the file and line.

mod date;
mod records;

pub use date::parse_game_date;
pub use records::{BowlerMeta, ScoreRecord, SCORE_DATE_FORMAT};

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::validate_input_path;
use crate::error::{Error, Result};
use records::RawScoreRow;

/// Load every game from the score sheet, in file order
pub fn load_scores(path: &Path) -> Result<Vec<ScoreRecord>> {
    let rows: Vec<(u64, RawScoreRow)> = read_rows(path)?;

    let records = rows
        .into_iter()
        .map(|(line, row)| {
            let date = parse_game_date(&row.date).ok_or_else(|| Error::InvalidDate {
                path: path.to_path_buf(),
                line,
                value: row.date.clone(),
            })?;
            Ok(ScoreRecord {
                disp: row.disp,
                score: row.score,
                date,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Loaded {} scores from {}", records.len(), path.display());
    Ok(records)
}

/// Load bowler display metadata
pub fn load_metadata(path: &Path) -> Result<Vec<BowlerMeta>> {
    let rows: Vec<(u64, BowlerMeta)> = read_rows(path)?;
    let metadata: Vec<BowlerMeta> = rows.into_iter().map(|(_, meta)| meta).collect();

    info!("Loaded {} bowler entries from {}", metadata.len(), path.display());
    Ok(metadata)
}

/// Deserialize every data row, paired with its line number
fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<(u64, T)>> {
    if !validate_input_path(path) {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let csv_error = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row = record.deserialize(Some(&headers)).map_err(csv_error)?;
        rows.push((line, row));
    }

    Ok(rows)
}
