//! Application configuration persisted as `<data_dir>/config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::eyre;
use funclab_core::model::{Domain, FunctionFamily};
use funclab_core::report::DEFAULT_PROBLEM_ROWS;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window the free-range simulator starts with
    pub simulator_domain: Domain,
    /// Rows in a problem report table
    pub report_rows: usize,
    /// Family the simulator starts with
    pub default_family: FunctionFamily,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulator_domain: Domain::default(),
            report_rows: DEFAULT_PROBLEM_ROWS,
            default_family: FunctionFamily::Linear,
        }
    }
}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Load the config, falling back to defaults when the file is missing,
    /// unreadable or invalid. Invalid individual values are reset.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        let config = match fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
                    return Self::default();
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
                return Self::default();
            }
        };

        config.validated()
    }

    pub fn save(&self, data_dir: &Path) -> color_eyre::Result<()> {
        fs::create_dir_all(data_dir)?;
        let yaml = self
            .to_yaml()
            .map_err(|e| eyre!("Failed to serialize config: {e}"))?;
        fs::write(Self::path(data_dir), yaml)?;
        Ok(())
    }

    fn validated(mut self) -> Self {
        let defaults = Self::default();
        if let Err(e) = self.simulator_domain.validate() {
            tracing::warn!(error = %e, "Configured simulator domain rejected");
            self.simulator_domain = defaults.simulator_domain;
        }
        if self.report_rows == 0 {
            tracing::warn!("report_rows must be at least 1");
            self.report_rows = defaults.report_rows;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(AppConfig::load_or_default(temp_dir.path()), AppConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig {
            simulator_domain: Domain::new(-5.0, 5.0, 0.25),
            report_rows: 8,
            default_family: FunctionFamily::Quadratic,
        };
        config.save(temp_dir.path()).unwrap();

        assert_eq!(AppConfig::load_or_default(temp_dir.path()), config);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = AppConfig::from_yaml("report_rows: 10\n").unwrap();
        assert_eq!(config.report_rows, 10);
        assert_eq!(config.simulator_domain, Domain::default());
        assert_eq!(config.default_family, FunctionFamily::Linear);
    }

    #[test]
    fn test_invalid_values_are_reset() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            AppConfig::path(temp_dir.path()),
            "simulator_domain:\n  min: 5.0\n  max: -5.0\n  step: 1.0\nreport_rows: 0\n",
        )
        .unwrap();

        let config = AppConfig::load_or_default(temp_dir.path());
        assert_eq!(config.simulator_domain, Domain::default());
        assert_eq!(config.report_rows, DEFAULT_PROBLEM_ROWS);
    }

    #[test]
    fn test_garbage_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(AppConfig::path(temp_dir.path()), "::: not yaml [").unwrap();
        assert_eq!(AppConfig::load_or_default(temp_dir.path()), AppConfig::default());
    }
}
