// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config
//!   global:      output_log_level, file_log_level, log_file
//!   enumeration: initial_capacity, max_capacity
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::wire::{DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_CAPACITY, EnumerationLimits};
use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stderr output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Buffer sizing for the grow-and-retry enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnumerationConfig {
    /// First buffer size tried, in bytes.
    pub initial_capacity: usize,
    /// Largest buffer size tried, in bytes.
    pub max_capacity: usize,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

impl EnumerationConfig {
    /// Checks the capacities against each other.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `initial_capacity` is zero or
    /// `max_capacity` is smaller than `initial_capacity`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                section: "enumeration".to_string(),
                key: "initial_capacity".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.max_capacity < self.initial_capacity {
            return Err(ConfigError::InvalidValue {
                section: "enumeration".to_string(),
                key: "max_capacity".to_string(),
                message: format!(
                    "must be at least initial_capacity ({}), got {}",
                    self.initial_capacity, self.max_capacity
                ),
            });
        }
        Ok(())
    }
}

impl From<EnumerationConfig> for EnumerationLimits {
    fn from(config: EnumerationConfig) -> Self {
        Self {
            initial_capacity: config.initial_capacity,
            max_capacity: config.max_capacity,
        }
    }
}
