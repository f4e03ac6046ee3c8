// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        ShimError
//!            |
//!    +-------+--------+
//!    v                v
//! InvalidName   BufferLimitExceeded
//!
//!       ConfigError
//!            |
//!            v
//!       InvalidValue
//! ```
//!
//! The C ABI has no error channel: absence, `-1` and short counts carry
//! every negative outcome. These types only surface on the Rust side.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ShimError`].
pub type ShimResult<T> = std::result::Result<T, ShimError>;

/// Errors raised by the safe environment API.
#[derive(Debug, Error)]
pub enum ShimError {
    /// A variable name cannot be represented in the environment table.
    #[error("invalid variable name '{name}': {reason}")]
    InvalidName { name: Box<str>, reason: &'static str },

    /// The grow-and-retry enumeration hit its buffer ceiling.
    #[error("environment block does not fit in {limit} bytes")]
    BufferLimitExceeded { limit: usize },
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
