// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The process environment as an [`EnvironmentTable`].
//!
//! Reads go through `std::env`, which walks `environ` in order and holds
//! the standard library's environment lock while doing so. That lock does
//! not cover foreign `setenv` callers; those must be serialized by whoever
//! owns them.
//!
//! Entries with no `=` after the first byte are skipped by `std::env`. The
//! C entry points in `ffi` walk `environ` themselves and keep
//! them.

use super::EnvironmentTable;
use super::types::VarName;
use std::borrow::Cow;
use std::ffi::OsString;
use std::ops::ControlFlow;

/// Handle on the process-wide environment table.
///
/// Values are returned as owned snapshots: the table can change under any
/// thread at any time, so nothing borrowed from it could be given a Rust
/// lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnvironment;

impl EnvironmentTable for OsEnvironment {
    fn lookup(&self, name: &VarName) -> Option<Cow<'_, [u8]>> {
        std::env::var_os(name.as_str()).map(|value| Cow::Owned(into_bytes(value)))
    }

    fn visit(&self, visitor: &mut dyn FnMut(&[u8], &[u8]) -> ControlFlow<()>) {
        for (key, value) in std::env::vars_os() {
            if visitor(&into_bytes(key), &into_bytes(value)).is_break() {
                break;
            }
        }
    }
}

#[cfg(unix)]
fn into_bytes(s: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    s.into_vec()
}

#[cfg(not(unix))]
fn into_bytes(s: OsString) -> Vec<u8> {
    s.to_string_lossy().into_owned().into_bytes()
}
