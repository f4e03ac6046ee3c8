// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! VarName: non-empty, no '=' / ';' / NUL
//! EnvData: Vec<(VarName, Vec<u8>)> in insertion order
//! ```

use crate::core::wire::{KEY_VALUE_SEPARATOR, RECORD_SEPARATOR};
use crate::error::{ShimError, ShimResult};

/// A validated environment variable name.
///
/// Names must survive a round trip through the enumeration wire format, so
/// they may not contain the record or key/value separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarName(Box<str>);

impl VarName {
    /// Validates `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ShimError::InvalidName`] if the name is empty or contains
    /// `=`, `;` or NUL.
    pub fn new(name: impl Into<String>) -> ShimResult<Self> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name.bytes().any(|b| b == KEY_VALUE_SEPARATOR) {
            Some("contains '='")
        } else if name.bytes().any(|b| b == RECORD_SEPARATOR) {
            Some("contains ';'")
        } else if name.bytes().any(|b| b == 0) {
            Some("contains NUL")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ShimError::InvalidName {
                name: name.into_boxed_str(),
                reason,
            }),
            None => Ok(Self(name.into_boxed_str())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for VarName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for VarName {
    type Error = ShimError;

    fn try_from(value: &str) -> ShimResult<Self> {
        Self::new(value)
    }
}

/// Shared environment data for copy-on-write semantics.
#[derive(Debug, Clone, Default)]
pub(super) struct EnvData {
    entries: Vec<(VarName, Vec<u8>)>,
}

impl EnvData {
    pub(super) fn position(&self, name: &[u8]) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.as_bytes() == name)
    }

    pub(super) fn get(&self, name: &[u8]) -> Option<&[u8]> {
        self.position(name).map(|i| self.entries[i].1.as_slice())
    }

    pub(super) fn get_mut(&mut self, name: &[u8]) -> Option<&mut Vec<u8>> {
        self.position(name).map(|i| &mut self.entries[i].1)
    }

    /// Replaces in place so the entry keeps its position.
    pub(super) fn insert(&mut self, name: VarName, value: Vec<u8>) {
        match self.get_mut(name.as_bytes()) {
            Some(existing) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub(super) fn remove(&mut self, name: &[u8]) {
        if let Some(i) = self.position(name) {
            self.entries.remove(i);
        }
    }

    pub(super) fn entries(&self) -> &[(VarName, Vec<u8>)] {
        &self.entries
    }
}
