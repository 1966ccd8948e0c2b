//! Configuration loading and management for the payroll engine.
//!
//! This module provides the pay-rules configuration (multipliers, allowance
//! tiers, title matching, dated corrections) and the loader that reads it
//! from YAML files. `PayRulesConfig::default()` carries the statutory
//! constants, so file-backed configuration is optional.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll").unwrap();
//! let config = loader.into_config();
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BasePayRules, CorrectionsFile, DatedCorrection, NightWindow, OvertimeAllowanceTiers,
    PayRulesConfig, RateMultipliers, RulesFile, TitlesConfig, TitlesFile, WorkedHoursAllowance,
};
