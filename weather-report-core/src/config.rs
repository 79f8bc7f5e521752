use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::loader::DEFAULT_DATASET;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// dataset = "/data/weatherHistory.csv"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Dataset used when none is given on the command line.
    pub dataset: Option<PathBuf>,
}

impl Config {
    /// Pick the dataset to read: an explicit path wins, then the configured
    /// default, then `weatherHistory.csv` in the working directory.
    pub fn resolve_dataset(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .or(self.dataset.as_deref())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET))
    }

    pub fn set_dataset(&mut self, path: PathBuf) {
        self.dataset = Some(path);
    }

    pub fn clear_dataset(&mut self) {
        self.dataset = None;
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-report", "weather-report")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_default_dataset_when_nothing_set() {
        let cfg = Config::default();
        assert_eq!(cfg.resolve_dataset(None), PathBuf::from("weatherHistory.csv"));
    }

    #[test]
    fn configured_dataset_beats_default() {
        let mut cfg = Config::default();
        cfg.set_dataset(PathBuf::from("/data/history.csv"));

        assert_eq!(cfg.resolve_dataset(None), PathBuf::from("/data/history.csv"));
    }

    #[test]
    fn explicit_dataset_beats_config() {
        let mut cfg = Config::default();
        cfg.set_dataset(PathBuf::from("/data/history.csv"));

        let resolved = cfg.resolve_dataset(Some(Path::new("today.csv")));
        assert_eq!(resolved, PathBuf::from("today.csv"));
    }

    #[test]
    fn clear_dataset_restores_default() {
        let mut cfg = Config::default();
        cfg.set_dataset(PathBuf::from("/data/history.csv"));
        cfg.clear_dataset();

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("config.toml")).expect("load");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_preserves_dataset() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_dataset(PathBuf::from("/data/history.csv"));
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "dataset = [").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
