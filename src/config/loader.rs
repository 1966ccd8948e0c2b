//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pay-rules
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CorrectionsFile, PayRulesConfig, RulesFile, TitlesFile};

/// Loads the pay-rules configuration from a directory.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/payroll/
/// ├── rules.yaml        # Multipliers, allowance tiers, base pay, night window
/// ├── titles.yaml       # Supervisory/managerial title matching
/// └── corrections.yaml  # Dated basic-hours corrections
/// ```
///
/// `rules.yaml` and `titles.yaml` are required; `corrections.yaml` is
/// optional and defaults to an empty table.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// let config = loader.into_config();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayRulesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when a required file is missing and
    /// `ConfigParseError` when a file contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules = Self::load_yaml::<RulesFile>(&path.join("rules.yaml"))?;
        let titles = Self::load_yaml::<TitlesFile>(&path.join("titles.yaml"))?;

        // Corrections are site-specific; a missing file means none.
        let corrections_path = path.join("corrections.yaml");
        let corrections = if corrections_path.exists() {
            Self::load_yaml::<CorrectionsFile>(&corrections_path)?
        } else {
            CorrectionsFile::default()
        };

        Ok(Self {
            config: PayRulesConfig::new(rules, titles, corrections),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns a reference to the loaded configuration.
    pub fn config(&self) -> &PayRulesConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayRulesConfig {
        self.config
    }
}
