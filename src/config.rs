//! Session configuration, optionally read from a TOML file.

use crate::error::ConfigError;
use crate::robot::DEFAULT_TABLE_SIZE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a robot session.
///
/// Missing fields fall back to the defaults of the console program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    /// Largest valid coordinate on both axes (inclusive).
    pub table_size: i32,

    /// Print the command menu when an interactive session starts.
    pub show_menu: bool,

    /// Follow every successful PLACE/MOVE/LEFT/RIGHT with a report.
    pub echo_reports: bool,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            show_menu: true,
            echo_reports: true,
        }
    }
}

impl RobotConfig {
    /// Checks the values a session cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_size < 0 {
            return Err(ConfigError::NegativeTableSize(self.table_size));
        }
        Ok(())
    }
}

/// Load config from a TOML file without validating it.
///
/// If the file is missing, returns `RobotConfig::default()`. Values may still
/// be overridden by the caller, so validation happens in [`resolve_config`].
pub fn load_config(path: &Path) -> Result<RobotConfig> {
    if !path.exists() {
        return Ok(RobotConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RobotConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Load `path`, apply command-line overrides, then validate the result.
pub fn resolve_config(
    path: &Path,
    table_size: Option<i32>,
    show_menu: Option<bool>,
) -> Result<RobotConfig> {
    let mut cfg = load_config(path)?;
    if let Some(size) = table_size {
        cfg.table_size = size;
    }
    if let Some(show) = show_menu {
        cfg.show_menu = show;
    }
    cfg.validate()
        .with_context(|| format!("invalid config (file {})", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("robot.toml")).unwrap();
        assert_eq!(cfg, RobotConfig::default());
        assert_eq!(cfg.table_size, 5);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robot.toml");
        fs::write(&path, "table_size = 9\n").unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.table_size, 9);
        assert!(cfg.show_menu);
        assert!(cfg.echo_reports);
    }

    #[test]
    fn negative_table_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robot.toml");
        fs::write(&path, "table_size = -1\n").unwrap();
        assert_eq!(load_config(&path).unwrap().table_size, -1);
        let err = resolve_config(&path, None, None).unwrap_err();
        assert!(format!("{err:#}").contains("table_size must be >= 0"));
    }

    #[test]
    fn overrides_apply_before_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robot.toml");
        fs::write(&path, "table_size = -1\nshow_menu = true\n").unwrap();
        let cfg = resolve_config(&path, Some(7), Some(false)).unwrap();
        assert_eq!(cfg.table_size, 7);
        assert!(!cfg.show_menu);

        let err = resolve_config(&dir.path().join("none.toml"), Some(-2), None).unwrap_err();
        assert!(format!("{err:#}").contains("got -2"));
    }
}
