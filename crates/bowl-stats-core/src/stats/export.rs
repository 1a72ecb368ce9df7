//! JSON export of the summary table and raw scores

use std::fs::{File, Permissions};
use std::io::{self, Write};
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tempfile::NamedTempFile;

use super::model::SummaryRow;
use super::report::StatsReport;
use crate::error::{Error, Result};
use crate::loader::ScoreRecord;

/// Key of the 100+ percentage column
pub const HUNDRED_PLUS_PCT_FIELD: &str = "100+(%)";

/// Summary fields that month columns must never shadow
pub const FIXED_FIELDS: [&str; 9] = [
    "disp",
    "pr",
    "avg",
    "total",
    "hundred_plus",
    "diff",
    HUNDRED_PLUS_PCT_FIELD,
    "name",
    "hexcode",
];

const INDENT: &[u8] = b"    ";

impl Serialize for SummaryRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let stats = &self.stats;
        let mut map = serializer.serialize_map(Some(FIXED_FIELDS.len() + self.months.len()))?;
        map.serialize_entry("disp", &stats.disp)?;
        map.serialize_entry("pr", &stats.pr)?;
        map.serialize_entry("avg", &stats.avg)?;
        map.serialize_entry("total", &stats.total)?;
        map.serialize_entry("hundred_plus", &stats.hundred_plus)?;
        map.serialize_entry("diff", &stats.diff)?;
        map.serialize_entry(HUNDRED_PLUS_PCT_FIELD, &stats.hundred_plus_pct)?;
        for (month, cell) in &self.months {
            map.serialize_entry(&month.to_string(), cell)?;
        }
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("hexcode", &self.hexcode)?;
        map.end()
    }
}

/// Shape of the exported document
#[derive(Serialize)]
struct ExportDocument<'a> {
    bowlers: Vec<SummaryRow>,
    scores: &'a [ScoreRecord],
}

impl<'a> From<&'a StatsReport> for ExportDocument<'a> {
    fn from(report: &'a StatsReport) -> Self {
        Self {
            bowlers: report.rows.iter().map(SummaryRow::rounded).collect(),
            scores: &report.scores,
        }
    }
}

/// Reject month column names that would overwrite a fixed field
pub fn check_month_columns<'a>(columns: impl IntoIterator<Item = &'a str>) -> Result<()> {
    for column in columns {
        if FIXED_FIELDS.contains(&column) {
            return Err(Error::ColumnCollision(column.to_string()));
        }
    }
    Ok(())
}

/// Render the report as pretty-printed JSON with 4-space indentation
pub fn to_json(report: &StatsReport) -> Result<Vec<u8>> {
    let columns: Vec<String> = report.months.iter().map(ToString::to_string).collect();
    check_month_columns(columns.iter().map(String::as_str))?;

    let document = ExportDocument::from(report);
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;

    Ok(buffer)
}

/// Export the report to a JSON file, replacing any existing file.
///
/// The document is rendered in full and written to a sibling temp file; the
/// target is only replaced once that write has succeeded.
pub fn export_json(report: &StatsReport, path: &Path) -> Result<()> {
    let json = to_json(report)?;
    write_replacing(path, |file| file.write_all(&json))
}

/// Write `path` through a temp file in the same directory.
///
/// On any failure the temp file is removed and `path` is left untouched.
fn write_replacing(path: &Path, write: impl FnOnce(&mut File) -> io::Result<()>) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    write(temp.as_file_mut())?;
    temp.as_file().sync_all()?;

    if let Some(permissions) = output_permissions(path) {
        temp.as_file().set_permissions(permissions)?;
    }

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Keep the mode of the file being replaced; new files are world-readable
#[cfg(unix)]
fn output_permissions(path: &Path) -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(
        std::fs::metadata(path)
            .map(|m| m.permissions())
            .unwrap_or_else(|_| Permissions::from_mode(0o644)),
    )
}

#[cfg(not(unix))]
fn output_permissions(path: &Path) -> Option<Permissions> {
    std::fs::metadata(path).ok().map(|m| m.permissions())
}
