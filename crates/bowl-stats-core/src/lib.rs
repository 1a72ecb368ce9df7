//! # bowl-stats-core
//!
//! Core library for turning a bowling league's score sheets into the JSON
//! feed behind its stats dashboard.
//!
//! ## Modules
//!
//! - [`builder`] - The end-to-end pipeline
//! - [`color`] - Fallback colors for bowlers without a hex code
//! - [`config`] - File locations and optional overrides
//! - [`error`] - Error types and Result alias
//! - [`loader`] - CSV loading of scores and bowler metadata
//! - [`stats`] - Aggregation, month pivot, metadata join and JSON export
//!
//! ## Example
//!
//! ```no_run
//! use bowl_stats_core::{Config, StatsBuilder};
//!
//! let summary = StatsBuilder::new(Config::default()).run().expect("Failed to build stats");
//! println!("{} bowlers written to {}", summary.bowlers, summary.output_path.display());
//! ```

// Module declarations
pub mod builder;
pub mod color;
pub mod config;
pub mod error;
pub mod loader;
pub mod stats;

// Re-export key types for convenience

// Error types
pub use error::{Error, Result};

// Configuration
pub use config::Config;

// Pipeline
pub use builder::{RunSummary, StatsBuilder};
pub use color::{ColorSource, RandomColors};

// Loading
pub use loader::{load_metadata, load_scores, BowlerMeta, ScoreRecord};

// Statistics
pub use stats::{
    export_json, to_json, BowlerStats, MonthCell, MonthKey, StatsAnalyzer, StatsReport,
    SummaryRow,
};
