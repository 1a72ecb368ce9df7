//! Joining bowler statistics with the month pivot and display metadata

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::color::ColorSource;
use crate::loader::BowlerMeta;

use super::model::{BowlerStats, MonthCell, MonthKey, SummaryRow};

/// Build one summary row per bowler.
///
/// Every row gets a cell for each month in `months`. Metadata is matched by
/// exact display key; the first row wins when a key repeats. Bowlers without
/// a usable hex code get one from `colors`.
pub fn merge_rows(
    stats: Vec<BowlerStats>,
    months: &BTreeSet<MonthKey>,
    metadata: &[BowlerMeta],
    colors: &mut dyn ColorSource,
) -> Vec<SummaryRow> {
    let index = index_metadata(metadata);

    for meta in metadata {
        if !stats.iter().any(|s| s.disp == meta.disp) {
            warn!("No scores for bowler '{}', leaving them out", meta.disp);
        }
    }

    stats
        .into_iter()
        .map(|mut stats| {
            // the pivoted cells replace the sparse map
            let monthly = std::mem::take(&mut stats.monthly);
            let meta = index.get(stats.disp.as_str()).copied();
            let hexcode = match meta.and_then(BowlerMeta::color) {
                Some(color) => color.to_string(),
                None => {
                    let color = colors.next_color();
                    debug!("Assigned generated color {} to '{}'", color, stats.disp);
                    color
                }
            };

            SummaryRow {
                months: pivot_months(&monthly, months),
                name: meta.map(|m| m.name.clone()),
                hexcode,
                stats,
            }
        })
        .collect()
}

/// Spread a bowler's sparse monthly averages over every observed month
fn pivot_months(
    monthly: &BTreeMap<MonthKey, f64>,
    months: &BTreeSet<MonthKey>,
) -> BTreeMap<MonthKey, MonthCell> {
    months
        .iter()
        .map(|month| {
            let cell = monthly
                .get(month)
                .map_or(MonthCell::NotAvailable, |avg| MonthCell::Average(*avg));
            (*month, cell)
        })
        .collect()
}

fn index_metadata(metadata: &[BowlerMeta]) -> HashMap<&str, &BowlerMeta> {
    let mut index = HashMap::with_capacity(metadata.len());
    for meta in metadata {
        if index.contains_key(meta.disp.as_str()) {
            warn!("Duplicate metadata for bowler '{}', keeping the first entry", meta.disp);
            continue;
        }
        index.insert(meta.disp.as_str(), meta);
    }
    index
}
