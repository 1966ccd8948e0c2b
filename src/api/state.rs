//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayRulesConfig};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded pay-rules configuration.
#[derive(Clone)]
pub struct AppState {
    /// The loaded pay-rules configuration.
    config: Arc<PayRulesConfig>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            config: Arc::new(loader.into_config()),
        }
    }

    /// Returns a reference to the pay-rules configuration.
    pub fn config(&self) -> &PayRulesConfig {
        &self.config
    }
}
