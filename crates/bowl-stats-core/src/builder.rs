//! End-to-end pipeline: load, aggregate, merge, export

use std::path::PathBuf;

use tracing::info;

use crate::color::{ColorSource, RandomColors};
use crate::config::Config;
use crate::error::Result;
use crate::loader::{load_metadata, load_scores};
use crate::stats::{export_json, StatsReport};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub bowlers: usize,
    pub scores: usize,
    pub months: usize,
    pub output_path: PathBuf,
}

/// Builds the bowlers JSON feed from the configured sheets
pub struct StatsBuilder {
    config: Config,
    colors: Box<dyn ColorSource>,
}

impl StatsBuilder {
    /// Create a builder using random fallback colors
    pub fn new(config: Config) -> Self {
        Self {
            config,
            colors: Box::new(RandomColors::from_entropy()),
        }
    }

    /// Set the source of colors for bowlers without a hex code
    pub fn color_source(mut self, colors: impl ColorSource + 'static) -> Self {
        self.colors = Box::new(colors);
        self
    }

    /// Load both sheets and compute the report without writing anything
    pub fn build(&mut self) -> Result<StatsReport> {
        let metadata = load_metadata(&self.config.hex_path)?;
        let scores = load_scores(&self.config.scores_path)?;

        Ok(StatsReport::from_records(
            scores,
            &metadata,
            self.colors.as_mut(),
        ))
    }

    /// Compute the report and write it to the configured output path
    pub fn run(mut self) -> Result<RunSummary> {
        let report = self.build()?;
        export_json(&report, &self.config.output_path)?;
        info!("Wrote {}", self.config.output_path.display());

        Ok(RunSummary {
            bowlers: report.rows.len(),
            scores: report.scores.len(),
            months: report.months.len(),
            output_path: self.config.output_path,
        })
    }
}
