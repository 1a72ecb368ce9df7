//! Configuration and default paths

mod paths;

pub use paths::*;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Configuration for bowl-stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Metadata sheet (display key, full name, hex code)
    pub hex_path: PathBuf,
    /// Score sheet (display key, score, date)
    pub scores_path: PathBuf,
    /// Where the JSON document is written
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hex_path: PathBuf::from(DEFAULT_HEX_FILE),
            scores_path: PathBuf::from(DEFAULT_SCORES_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Load config from the working directory, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save config to disk
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve every path against a base directory
    pub fn rooted_at(&self, base: &Path) -> Self {
        Self {
            hex_path: base.join(&self.hex_path),
            scores_path: base.join(&self.scores_path),
            output_path: base.join(&self.output_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.hex_path, PathBuf::from("bowl - hex.csv"));
        assert_eq!(config.scores_path, PathBuf::from("bowl - all.csv"));
        assert_eq!(config.output_path, PathBuf::from("bowlers.json"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bowl-stats.json");
        std::fs::write(&path, r#"{ "output_path": "public/bowlers.json" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_path, PathBuf::from("public/bowlers.json"));
        assert_eq!(config.scores_path, PathBuf::from(DEFAULT_SCORES_FILE));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bowl-stats.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("bowl-stats.json");
        let config = Config {
            output_path: PathBuf::from("out.json"),
            ..Default::default()
        };

        config.save(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_rooted_at() {
        let config = Config::default().rooted_at(Path::new("/league"));
        assert_eq!(config.scores_path, PathBuf::from("/league/bowl - all.csv"));
    }
}
