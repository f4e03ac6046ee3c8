// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the `corelib-probe` binary.
//!
//! The shim entry points read no configuration; only the diagnostic binary
//! does.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --ini files, in order
//! 3. corelib.toml (cwd, optional)
//! 4. CORELIB_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CORELIB_GLOBAL__OUTPUT_LOG_LEVEL=4        → global.output_log_level = 4
//! CORELIB_ENUMERATION__INITIAL_CAPACITY=64  → enumeration.initial_capacity = 64
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::wire::EnumerationLimits;
use crate::error::Result;

use loader::ConfigLoader;
use types::{EnumerationConfig, GlobalConfig};

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "CORELIB";

/// Name of the optional configuration file in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "corelib.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Enumeration buffer sizing.
    pub enumeration: EnumerationConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use corelib_native::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("probe.toml")
    ///     .add_toml_file_optional("corelib.toml")
    ///     .with_env_prefix("CORELIB")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Enumeration limits derived from `[enumeration]`.
    #[must_use]
    pub fn limits(&self) -> EnumerationLimits {
        self.enumeration.into()
    }

    /// Validates cross-field constraints after deserialization.
    ///
    /// # Errors
    ///
    /// Returns an error if any section holds inconsistent values.
    pub fn validate(&self) -> Result<()> {
        self.enumeration.validate()?;
        Ok(())
    }
}
