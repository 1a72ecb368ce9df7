//! Default file locations for the batch converter

use std::path::{Path, PathBuf};

/// Bowler full names, display names and hex codes
pub const DEFAULT_HEX_FILE: &str = "bowl - hex.csv";

/// Every recorded game
pub const DEFAULT_SCORES_FILE: &str = "bowl - all.csv";

/// Dashboard feed written on success
pub const DEFAULT_OUTPUT_FILE: &str = "bowlers.json";

/// Optional overrides, looked up in the working directory
pub const CONFIG_FILE: &str = "bowl-stats.json";

/// Check that an input path points at a readable file
pub fn validate_input_path(path: &Path) -> bool {
    path.is_file()
}

/// Path of the config file relative to the working directory
pub fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}
