// Application configuration.
// Loaded from config.json in the platform config dir, with environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, ShiftError};
use crate::format::ClockFormat;
use crate::storage;

/// Overrides the export directory.
pub const ENV_EXPORT_DIR: &str = "SHIFTLOG_EXPORT_DIR";
/// Overrides the share mode (`open` or `none`).
pub const ENV_SHARE: &str = "SHIFTLOG_SHARE";

/// What happens to an exported file after it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareMode {
    /// Hand the file to the OS default handler.
    #[default]
    Open,
    /// Only write the file.
    None,
}

impl ShareMode {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(ShareMode::Open),
            "none" => Ok(ShareMode::None),
            other => Err(ShiftError::Config(format!(
                "unknown share mode '{}', expected 'open' or 'none'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory exported CSV files are written to.
    pub export_dir: PathBuf,
    pub share: ShareMode,
    /// Start/end time rendering in the table and export.
    pub clock_format: ClockFormat,
    /// Period of the elapsed-time ticker.
    pub tick_millis: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: storage::default_export_dir(),
            share: ShareMode::default(),
            clock_format: ClockFormat::default(),
            tick_millis: 1000,
        }
    }
}

impl Config {
    /// Load configuration from the platform config dir and apply environment overrides.
    ///
    /// A missing or unreadable file yields defaults; the failure is logged.
    pub fn load() -> Self {
        let mut config = match storage::config_path() {
            Some(path) => match Self::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    warn!(error = %e, path = ?path, "Failed to load config, using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        };

        if let Err(e) = config.apply_overrides(|key| std::env::var(key).ok()) {
            warn!(error = %e, "Ignoring invalid environment override");
        }

        info!(export_dir = ?config.export_dir, share = ?config.share, "Configuration loaded");
        config
    }

    /// Read a config file. Missing files yield defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: Option<Config> = storage::read_json(path)?;
        let config = config.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(dir) = lookup(ENV_EXPORT_DIR).filter(|d| !d.trim().is_empty()) {
            self.export_dir = PathBuf::from(dir);
        }
        if let Some(mode) = lookup(ENV_SHARE) {
            self.share = ShareMode::parse(&mode)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.tick_millis == 0 {
            return Err(ShiftError::Config("tick_millis must be greater than zero".into()));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::storage::write_text;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::from_file(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert_eq!(config.clock_format, ClockFormat::TwelveHour);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        write_text(&path, r#"{"clock_format":"24h","share":"none"}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.clock_format, ClockFormat::TwentyFourHour);
        assert_eq!(config.share, ShareMode::None);
        assert_eq!(config.tick_millis, 1000);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        write_text(&path, r#"{"tick_millis":0}"#).unwrap();
        assert!(matches!(Config::from_file(&path), Err(ShiftError::Config(_))));

        write_text(&path, "not json").unwrap();
        assert!(matches!(Config::from_file(&path), Err(ShiftError::Json(_))));
    }

    #[test]
    fn test_environment_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_EXPORT_DIR, "/tmp/shift-exports"), (ENV_SHARE, "NONE")]);
        let mut config = Config::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.export_dir, PathBuf::from("/tmp/shift-exports"));
        assert_eq!(config.share, ShareMode::None);
    }

    #[test]
    fn test_invalid_share_override() {
        let mut config = Config::default();
        let result = config.apply_overrides(|key| (key == ENV_SHARE).then(|| "email".to_string()));
        assert!(result.is_err());
        assert_eq!(config.share, ShareMode::Open);
    }
}
